//! The parse action a table yields for a given (state, symbol) pair.

use harrow_core::{StateId, Symbol};
use serde::{Deserialize, Serialize};

/// One entry of a language table's action matrix.
///
/// This is a closed Rust enum: there is no representable "unrecognized tag"
/// once a value of this type exists. A table's bytes are validated once, at
/// [`crate::CompiledLanguage::decode`] time, rather than being re-checked on
/// every lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Push the lookahead and move to `to_state`.
    Shift { to_state: StateId },
    /// Push the lookahead as an extra; the state is unchanged regardless of
    /// the state recorded here (extras never advance the automaton).
    ShiftExtra,
    /// Pop `child_count` grammar-visible entries (extras are absorbed
    /// without counting) and push one node of kind `symbol`.
    Reduce { symbol: Symbol, child_count: u16 },
    /// Like `Reduce` with a child count of one, but the resulting node is
    /// itself marked extra.
    ReduceExtra { symbol: Symbol },
    /// The input is a complete, valid document.
    Accept,
    /// No action is defined for this (state, symbol) pair; triggers error
    /// recovery.
    Error,
}
