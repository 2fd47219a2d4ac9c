//! The compiled language table: the data half of a "language" (the other
//! half, the lex function, is supplied separately — see
//! `harrow_driver::Language`).

use crate::action::Action;
use crate::error::TableError;
use crate::header::{Header, HEADER_SIZE};
use harrow_core::{LexStateId, StateId, Symbol};
use serde::{Deserialize, Serialize};

/// Per-symbol metadata a table declares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMetadata {
    pub name: String,
    /// Whether, when a parent's children are exposed, a node of this
    /// symbol should be spliced out in favor of its own children.
    pub is_hidden: bool,
}

/// A fully validated, read-only language table.
///
/// Constructed either directly (a grammar's own crate builds one in code,
/// as `harrow-testlang` does) or by decoding bytes produced by `encode`.
/// Every `action`/`lex_state`/`symbol_name` lookup is a bounds-checked flat
/// array index; a table that round-tripped through [`CompiledLanguage::decode`]
/// is guaranteed never to index out of range internally, because `decode`
/// rejects any table whose action references a state or symbol it doesn't
/// have.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompiledLanguage {
    state_count: usize,
    symbols: Vec<SymbolMetadata>,
    /// Flat `state * symbol_count + symbol` layout, for cache locality;
    /// never indexed directly outside this module.
    parse_table: Vec<Action>,
    lex_states: Vec<LexStateId>,
}

impl CompiledLanguage {
    /// Build a table directly from its parts, validating internal
    /// consistency the same way [`Self::decode`] does for bytes.
    pub fn new(
        state_count: usize,
        symbols: Vec<SymbolMetadata>,
        parse_table: Vec<Action>,
        lex_states: Vec<LexStateId>,
    ) -> Result<Self, TableError> {
        let table = Self {
            state_count,
            symbols,
            parse_table,
            lex_states,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn symbol_name(&self, symbol: Symbol) -> &str {
        &self.symbols[symbol as usize].name
    }

    pub fn is_hidden(&self, symbol: Symbol) -> bool {
        self.symbols[symbol as usize].is_hidden
    }

    pub fn action(&self, state: StateId, symbol: Symbol) -> Action {
        let idx = state as usize * self.symbol_count() + symbol as usize;
        self.parse_table[idx]
    }

    pub fn lex_state(&self, state: StateId) -> LexStateId {
        self.lex_states[state as usize]
    }

    fn validate(&self) -> Result<(), TableError> {
        let symbol_count = self.symbols.len();
        let expected_table_len = self.state_count * symbol_count;
        if self.parse_table.len() != expected_table_len {
            return Err(TableError::SizeMismatch {
                expected: expected_table_len,
                found: self.parse_table.len(),
            });
        }
        if self.lex_states.len() != self.state_count {
            return Err(TableError::LexStatesSizeMismatch {
                expected: self.state_count,
                found: self.lex_states.len(),
            });
        }
        for (idx, action) in self.parse_table.iter().enumerate() {
            let state = idx / symbol_count;
            let in_range = |value: u32, what: &'static str, bound: usize| -> Result<(), TableError> {
                if (value as usize) < bound {
                    Ok(())
                } else {
                    Err(TableError::OutOfRange {
                        state,
                        what,
                        value,
                        symbol_count,
                        state_count: self.state_count,
                    })
                }
            };
            match *action {
                Action::Shift { to_state } => in_range(to_state as u32, "to_state", self.state_count)?,
                Action::Reduce { symbol, .. } => in_range(symbol as u32, "symbol", symbol_count)?,
                Action::ReduceExtra { symbol } => in_range(symbol as u32, "symbol", symbol_count)?,
                Action::ShiftExtra | Action::Accept | Action::Error => {}
            }
        }
        Ok(())
    }

    /// Encode as `header || postcard(self)`, with the header's checksum
    /// covering the postcard body.
    pub fn encode(&self) -> Vec<u8> {
        let body = postcard::to_allocvec(self).expect("CompiledLanguage always serializes");
        let checksum = crc32fast::hash(&body);
        let header = Header::new(checksum, (HEADER_SIZE + body.len()) as u32);
        let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&body);
        out
    }

    /// Decode and fully validate a table previously produced by
    /// [`Self::encode`]. This is the boundary where a malformed table
    /// surfaces as an error, before any lookup can observe it.
    pub fn decode(bytes: &[u8]) -> Result<Self, TableError> {
        let header = Header::from_bytes(bytes).ok_or(TableError::Truncated {
            found: bytes.len(),
            needed: HEADER_SIZE,
        })?;
        if header.magic != crate::header::MAGIC {
            return Err(TableError::BadMagic {
                expected: crate::header::MAGIC,
                found: header.magic,
            });
        }
        if header.version != crate::header::VERSION {
            return Err(TableError::UnsupportedVersion {
                expected: crate::header::VERSION,
                found: header.version,
            });
        }
        let body = &bytes[HEADER_SIZE..];
        if crc32fast::hash(body) != header.checksum {
            return Err(TableError::ChecksumMismatch);
        }
        let table: CompiledLanguage =
            postcard::from_bytes(body).map_err(|err| TableError::Decode(err.to_string()))?;
        table.validate()?;
        Ok(table)
    }
}
