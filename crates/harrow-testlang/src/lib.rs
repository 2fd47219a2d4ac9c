//! A small concrete language — a list of `name = number;` bindings, with
//! `#`-comments — used to drive the parse driver's own tests against a real
//! table and a real `logos`-based lexer rather than a throwaway fixture
//! reinvented per test module.

mod grammar;
mod lexer;
pub mod symbols;

pub use grammar::table;
pub use lexer::BindingListLexer;

#[cfg(test)]
mod tests {
    use super::*;
    use harrow_core::LexStateId;
    use harrow_lexer::Lexer;

    #[test]
    fn lexes_a_binding_with_leading_comment_and_whitespace() {
        let input = "# note\n  count = 12;";
        let mut lexer = Lexer::new(input);
        let token = lexer.lex(&BindingListLexer, 0 as LexStateId).unwrap();
        assert_eq!(token.symbol, symbols::COMMENT);
        assert_eq!(token.size.bytes, "# note".len() as u32);
    }

    #[test]
    fn classifies_every_token_kind() {
        let cases: &[(&str, harrow_core::Symbol)] = &[
            ("count", symbols::IDENT),
            ("=", symbols::EQUALS),
            ("12", symbols::NUMBER),
            (";", symbols::SEMI),
            ("@", symbols::UNKNOWN),
        ];
        for (text, expected) in cases {
            let mut lexer = Lexer::new(text);
            let token = lexer.lex(&BindingListLexer, 0 as LexStateId).unwrap();
            assert_eq!(token.symbol, *expected, "lexing {text:?}");
        }
    }

    #[test]
    fn table_round_trips_through_encode_decode() {
        let bytes = table().encode();
        let decoded = harrow_table::CompiledLanguage::decode(&bytes).unwrap();
        assert_eq!(decoded.state_count(), table().state_count());
    }
}
