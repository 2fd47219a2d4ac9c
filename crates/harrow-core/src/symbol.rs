//! Reserved identifiers a language table and the driver agree on.

/// A grammar symbol: a terminal or nonterminal declared by a language table.
pub type Symbol = u16;

/// An LR automaton state. State `0` doubles as the sentinel used when no
/// parse decision is needed (e.g. pushing the finalized root).
pub type StateId = u16;

/// The lex-state a language table associates with a parse state, passed to
/// the language's lex function as a hint about which tokens are expected.
pub type LexStateId = u16;

/// The built-in error token. Injected by error recovery and matched
/// literally by the driver to detect an already-recovering lookahead.
pub const SYM_ERROR: Symbol = 0;

/// The built-in root nonterminal every parse finalizes into.
pub const SYM_DOCUMENT: Symbol = 1;

/// The built-in end-of-input terminal. Synthesized by the driver when the
/// lexer reports end of input, so the action table always has an entry to
/// dispatch on rather than needing a special case for "no more tokens".
pub const SYM_END: Symbol = 2;

/// The initial automaton state, also the stack's empty-state sentinel.
pub const START_STATE: StateId = 0;

/// The reserved lex-state that recognizes every token kind regardless of
/// the current parse state, used while error recovery searches for a
/// resynchronization point.
pub const LEX_STATE_ERROR: LexStateId = LexStateId::MAX;
