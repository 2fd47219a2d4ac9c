//! The cursor-based lexer adaptor: bridges a language's lex function (which
//! only ever deals in `char`s) to the driver (which only ever deals in
//! [`harrow_core::Length`]s).

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::LexedToken;

use harrow_core::{LexStateId, Length, Symbol};

/// A language's scanner: given a cursor positioned at some offset and the
/// lex state the driver's table says to scan in, produce the next token (or
/// `None` if nothing matches, which the driver treats the same as an
/// unrecognized lookahead).
pub trait LanguageLexer {
    fn lex(&self, cursor: &mut Cursor, lex_state: LexStateId) -> Option<Symbol>;
}

/// Drives repeated lex attempts over one source string, tracking the
/// absolute position reached so far.
///
/// `reset` is how the driver reuses a `Lexer` across an incremental parse:
/// rather than rebuilding one from scratch, it seeks the existing adaptor
/// back to the position a stack breakdown landed on.
pub struct Lexer<'a> {
    src: &'a str,
    offset: usize,
    position: Length,
    /// The content-start position of the most recent successful lex attempt
    /// — after that attempt's own padding, before its own content. Distinct
    /// from `position` (which has already advanced past the token's
    /// content) so error recovery can measure a skipped span up to, but not
    /// including, the token it's about to resume on.
    last_token_start: Length,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            offset: 0,
            position: Length::ZERO,
            last_token_start: Length::ZERO,
        }
    }

    /// Seek to a specific byte offset and absolute position, discarding
    /// whatever the adaptor had lexed before.
    pub fn reset(&mut self, offset: usize, position: Length) {
        self.offset = offset;
        self.position = position;
        self.last_token_start = position;
    }

    pub fn current_position(&self) -> Length {
        self.position
    }

    pub fn current_offset(&self) -> usize {
        self.offset
    }

    /// The content-start position of the most recent successful lex
    /// attempt (after skipping any leading padding).
    pub fn token_start_position(&self) -> Length {
        self.last_token_start
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// Consume exactly one character, used when `lex`/`lex_with` made no
    /// progress and the driver needs to move forward anyway. Returns
    /// `false` at end of input.
    pub fn advance(&mut self) -> bool {
        let Some(ch) = self.src[self.offset..].chars().next() else {
            return false;
        };
        self.offset += ch.len_utf8();
        self.position = self.position + Length::of_char(ch);
        true
    }

    /// Run one lex attempt at the current position, advancing past
    /// whatever the language's lex function consumed on success.
    pub fn lex<L: LanguageLexer>(&mut self, language: &L, lex_state: LexStateId) -> Option<LexedToken> {
        self.lex_with(lex_state, |cursor, lex_state| language.lex(cursor, lex_state))
    }

    /// Like [`Self::lex`], but takes the scan as a closure instead of a
    /// [`LanguageLexer`] impl — lets a caller whose own "language" type
    /// already bundles table lookups alongside lexing (as
    /// `harrow_driver::Language` does) drive a lex attempt without also
    /// implementing this crate's trait.
    pub fn lex_with<F>(&mut self, lex_state: LexStateId, scan: F) -> Option<LexedToken>
    where
        F: FnOnce(&mut Cursor, LexStateId) -> Option<Symbol>,
    {
        let start_position = self.position;
        let mut cursor = Cursor::new(&self.src[self.offset..], start_position);
        let symbol = scan(&mut cursor, lex_state)?;
        let token = LexedToken {
            symbol,
            padding: cursor.padding_len(),
            size: cursor.content_len(),
        };
        self.offset += cursor.bytes_consumed();
        self.position = cursor.end_position();
        self.last_token_start = start_position + token.padding;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD: Symbol = 0;
    const SPACE_LEX_STATE: LexStateId = 0;

    struct WordLexer;

    impl LanguageLexer for WordLexer {
        fn lex(&self, cursor: &mut Cursor, _lex_state: LexStateId) -> Option<Symbol> {
            while cursor.peek_char() == Some(' ') {
                cursor.skip_char();
            }
            if cursor.at_eof() {
                return None;
            }
            cursor.mark_start();
            while let Some(ch) = cursor.peek_char() {
                if ch == ' ' {
                    break;
                }
                cursor.bump_char();
            }
            Some(WORD)
        }
    }

    #[test]
    fn lexes_padding_and_content_separately() {
        let mut lexer = Lexer::new("  hi there");
        let token = lexer.lex(&WordLexer, SPACE_LEX_STATE).unwrap();
        assert_eq!(token.symbol, WORD);
        assert_eq!(token.padding.bytes, 2);
        assert_eq!(token.size.bytes, 2);

        let token = lexer.lex(&WordLexer, SPACE_LEX_STATE).unwrap();
        assert_eq!(token.padding.bytes, 1);
        assert_eq!(token.size.bytes, 5);
    }

    #[test]
    fn returns_none_at_eof() {
        let mut lexer = Lexer::new("   ");
        assert!(lexer.lex(&WordLexer, SPACE_LEX_STATE).is_none());
    }

    #[test]
    fn reset_reseeks_position() {
        let mut lexer = Lexer::new("aaa bbb");
        lexer.lex(&WordLexer, SPACE_LEX_STATE).unwrap();
        let mid_offset = lexer.current_offset();
        let mid_position = lexer.current_position();
        lexer.lex(&WordLexer, SPACE_LEX_STATE).unwrap();
        lexer.reset(mid_offset, mid_position);
        let token = lexer.lex(&WordLexer, SPACE_LEX_STATE).unwrap();
        assert_eq!(token.size.bytes, 3);
    }
}
