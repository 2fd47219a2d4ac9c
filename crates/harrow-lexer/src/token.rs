use harrow_core::{Length, Symbol};

/// What a language's lex function hands back for one lex attempt: a symbol,
/// plus how much source it consumed as leading padding versus token content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexedToken {
    pub symbol: Symbol,
    pub padding: Length,
    pub size: Length,
}
