//! Shared primitives for the harrow parsing crates.
//!
//! This crate carries the data that every other crate in the workspace needs
//! a copy of: the two-dimensional [`Length`]/[`Point`] arithmetic, and the
//! small integer identifiers (`Symbol`, `StateId`, `LexStateId`) a language
//! table is built from, plus the handful of ids this crate itself reserves.

mod length;
mod symbol;

pub use length::{Length, Point};
pub use symbol::{
    LexStateId, StateId, Symbol, LEX_STATE_ERROR, START_STATE, SYM_DOCUMENT, SYM_END, SYM_ERROR,
};
