//! The two-phase skip/mark/bump protocol a language's lex function scans
//! through.

use harrow_core::Length;

/// A scan over one lex attempt's worth of source text.
///
/// A `Cursor` never hands the caller a [`Length`] to build itself — it
/// tracks byte and row/column position internally, character by character,
/// so the language's lex function only ever deals in `char`s. `skip_char`
/// extends the padding run preceding the token; `mark_start` freezes the
/// padding/content boundary; `bump_char` extends the token's own content.
/// Calling `bump_char` before `mark_start` implicitly marks the boundary at
/// the current position, matching what a lex function that has no leading
/// padding to skip would expect.
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
    start_position: Length,
    position: Length,
    mark_offset: Option<usize>,
    mark_position: Option<Length>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, position: Length) -> Self {
        Self {
            text,
            offset: 0,
            start_position: position,
            position,
            mark_offset: None,
            mark_position: None,
        }
    }

    /// The next character, without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// Whether the cursor has reached the end of the source.
    pub fn at_eof(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// The unconsumed text from the current position onward, for a lex
    /// function that wants to run its own longest-match scan (e.g. handing
    /// it to a `logos` lexer) rather than inspecting one `char` at a time.
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Consume the next character as padding (it precedes the token and is
    /// never part of it). Returns `None` at end of input.
    pub fn skip_char(&mut self) -> Option<char> {
        self.advance()
    }

    /// Freeze the boundary between padding and token content at the current
    /// position. Idempotent: calling it again moves the boundary forward.
    pub fn mark_start(&mut self) {
        self.mark_offset = Some(self.offset);
        self.mark_position = Some(self.position);
    }

    /// Consume the next character as token content. Returns `None` at end of
    /// input.
    pub fn bump_char(&mut self) -> Option<char> {
        if self.mark_offset.is_none() {
            self.mark_start();
        }
        self.advance()
    }

    /// The token text accumulated since `mark_start` (or since the first
    /// `bump_char`, if `mark_start` was never called explicitly).
    pub fn token_text(&self) -> &'a str {
        let start = self.mark_offset.unwrap_or(self.offset);
        &self.text[start..self.offset]
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        self.position = self.position + Length::of_char(ch);
        Some(ch)
    }

    pub(crate) fn padding_len(&self) -> Length {
        let mark = self.mark_position.unwrap_or(self.position);
        mark - self.start_position
    }

    pub(crate) fn content_len(&self) -> Length {
        let mark = self.mark_position.unwrap_or(self.start_position);
        self.position - mark
    }

    pub(crate) fn bytes_consumed(&self) -> usize {
        self.offset
    }

    pub(crate) fn end_position(&self) -> Length {
        self.position
    }
}
