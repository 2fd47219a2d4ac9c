//! Failure modes for decoding a language table from bytes.

/// Why a byte buffer didn't decode into a usable [`crate::CompiledLanguage`].
///
/// This is the one place a malformed table surfaces as an error —
/// `harrow_driver::Parser::parse` never returns a `Result` because, once a
/// table has passed through here, it is structurally guaranteed to be
/// well-formed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    #[error("truncated table: {found} bytes is too short to contain a header ({needed} needed)")]
    Truncated { found: usize, needed: usize },

    #[error("bad magic bytes: expected {expected:?}, found {found:?}")]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    #[error("unsupported table format version {found} (this build reads version {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("checksum mismatch: table bytes were corrupted or truncated")]
    ChecksumMismatch,

    #[error("table body failed to decode: {0}")]
    Decode(String),

    #[error(
        "action at state {state} references out-of-range {what} {value} (symbol_count={symbol_count}, state_count={state_count})"
    )]
    OutOfRange {
        state: usize,
        what: &'static str,
        value: u32,
        symbol_count: usize,
        state_count: usize,
    },

    #[error("parse_table length {found} does not match state_count * symbol_count = {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("lex_states length {found} does not match state_count = {expected}")]
    LexStatesSizeMismatch { expected: usize, found: usize },
}
