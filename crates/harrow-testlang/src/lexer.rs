//! A `logos`-driven [`LanguageLexer`] for the binding-list grammar.
//!
//! `logos` classifies the text ahead of the cursor; this lexer is
//! responsible for turning that classification into the skip/mark/bump
//! calls the cursor protocol expects. Both the normal lex state and the
//! error-recovery lex state recognize the same tokens — this grammar has no
//! context-sensitive lexing to speak of.

use harrow_core::{LexStateId, Symbol};
use harrow_lexer::{Cursor, LanguageLexer};
use logos::Logos;

use crate::symbols::{COMMENT, EQUALS, IDENT, NUMBER, SEMI, UNKNOWN};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("=")]
    Equals,

    #[token(";")]
    Semi,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,
}

fn symbol_for(token: Token) -> Symbol {
    match token {
        Token::Whitespace => unreachable!("whitespace is consumed before classification matters"),
        Token::Equals => EQUALS,
        Token::Semi => SEMI,
        Token::Number => NUMBER,
        Token::Ident => IDENT,
        Token::Comment => COMMENT,
    }
}

pub struct BindingListLexer;

impl LanguageLexer for BindingListLexer {
    fn lex(&self, cursor: &mut Cursor, _lex_state: LexStateId) -> Option<Symbol> {
        loop {
            if cursor.at_eof() {
                return None;
            }
            let rest = cursor.rest();
            let mut scan = Token::lexer(rest);
            match scan.next() {
                Some(Ok(Token::Whitespace)) => {
                    for _ in rest[..scan.span().end].chars() {
                        cursor.skip_char();
                    }
                }
                Some(Ok(token)) => {
                    cursor.mark_start();
                    for _ in rest[..scan.span().end].chars() {
                        cursor.bump_char();
                    }
                    return Some(symbol_for(token));
                }
                Some(Err(())) | None => {
                    // logos reports the shortest unmatched run; one character
                    // is always a safe opaque token to hand back.
                    cursor.mark_start();
                    cursor.bump_char();
                    return Some(UNKNOWN);
                }
            }
        }
    }
}
