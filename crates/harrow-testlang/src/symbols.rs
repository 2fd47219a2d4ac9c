//! Grammar symbols for the binding-list language:
//!
//! ```text
//! document : statement*
//! statement : IDENT EQUALS NUMBER SEMI
//!           | IDENT ERROR SEMI      (error-recovered binding)
//! ```
//!
//! `#`-comments and runs of whitespace may appear between any two tokens.

use harrow_core::{Symbol, SYM_DOCUMENT, SYM_END, SYM_ERROR};

pub const ERROR: Symbol = SYM_ERROR;
pub const DOCUMENT: Symbol = SYM_DOCUMENT;
pub const END: Symbol = SYM_END;
pub const IDENT: Symbol = 3;
pub const EQUALS: Symbol = 4;
pub const NUMBER: Symbol = 5;
pub const SEMI: Symbol = 6;
pub const STATEMENT: Symbol = 7;
pub const COMMENT: Symbol = 8;
pub const UNKNOWN: Symbol = 9;

pub const SYMBOL_COUNT: usize = 10;

pub(crate) fn metadata() -> Vec<harrow_table::SymbolMetadata> {
    let named = |name: &str, is_hidden: bool| harrow_table::SymbolMetadata {
        name: name.to_string(),
        is_hidden,
    };
    vec![
        named("ERROR", false),
        named("document", true),
        named("END", false),
        named("ident", false),
        named("=", false),
        named("number", false),
        named(";", false),
        named("statement", false),
        named("comment", true),
        named("UNKNOWN", false),
    ]
}
