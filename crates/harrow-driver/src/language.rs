//! The read-only collaborator a `Parser` is constructed from: a table plus a
//! lex function.

use harrow_core::{LexStateId, StateId, Symbol};
use harrow_lexer::{Cursor, LanguageLexer};
use harrow_table::{Action, CompiledLanguage};

/// Everything the driver needs from a language: table lookups plus the
/// ability to lex. Implemented once as [`StaticLanguage`] for the common
/// case of a table paired with a lexer; a caller with its own table
/// representation can implement this directly instead.
pub trait Language {
    fn symbol_count(&self) -> usize;
    fn symbol_name(&self, symbol: Symbol) -> &str;
    fn is_hidden(&self, symbol: Symbol) -> bool;
    fn action(&self, state: StateId, symbol: Symbol) -> Action;
    fn lex_state(&self, state: StateId) -> LexStateId;
    fn lex(&self, cursor: &mut Cursor, lex_state: LexStateId) -> Option<Symbol>;
}

/// A [`CompiledLanguage`] table paired with a concrete lex function,
/// implementing [`Language`] by delegating table lookups to the table and
/// lexing to the lexer.
pub struct StaticLanguage<X> {
    table: CompiledLanguage,
    lexer: X,
}

impl<X: LanguageLexer> StaticLanguage<X> {
    pub fn new(table: CompiledLanguage, lexer: X) -> Self {
        Self { table, lexer }
    }
}

impl<X: LanguageLexer> Language for StaticLanguage<X> {
    fn symbol_count(&self) -> usize {
        self.table.symbol_count()
    }

    fn symbol_name(&self, symbol: Symbol) -> &str {
        self.table.symbol_name(symbol)
    }

    fn is_hidden(&self, symbol: Symbol) -> bool {
        self.table.is_hidden(symbol)
    }

    fn action(&self, state: StateId, symbol: Symbol) -> Action {
        self.table.action(state, symbol)
    }

    fn lex_state(&self, state: StateId) -> LexStateId {
        self.table.lex_state(state)
    }

    fn lex(&self, cursor: &mut Cursor, lex_state: LexStateId) -> Option<Symbol> {
        self.lexer.lex(cursor, lex_state)
    }
}
