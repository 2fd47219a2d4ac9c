//! The incremental, error-recovering shift/reduce parse driver: the engine
//! that turns a language table, a lex function, and a source string into a
//! concrete syntax tree.

mod edit;
mod language;
mod parser;
mod stack;
mod tracer;

pub use edit::Edit;
pub use language::{Language, StaticLanguage};
pub use parser::Parser;
pub use stack::ParseStack;
pub use tracer::{NoopTracer, PrintTracer, Tracer};
