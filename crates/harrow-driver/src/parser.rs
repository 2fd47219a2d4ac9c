//! The shift/reduce driver loop: lexing, extras, error recovery, incremental
//! restart, and root finalization.

use harrow_core::{Length, Symbol, LEX_STATE_ERROR, SYM_DOCUMENT, SYM_END, SYM_ERROR};
use harrow_lexer::Lexer;
use harrow_table::Action;
use harrow_tree::Node;

use crate::edit::Edit;
use crate::language::Language;
use crate::stack::ParseStack;
use crate::tracer::{NoopTracer, Tracer};

/// Drives one language's table and lex function over repeated `parse`
/// calls, reusing the stack across calls for incremental reparses.
pub struct Parser<L: Language> {
    language: L,
    stack: ParseStack,
    lookahead: Option<Node>,
    next_lookahead: Option<Node>,
    tracer: Box<dyn Tracer>,
}

impl<L: Language> Parser<L> {
    pub fn new(language: L) -> Self {
        Self {
            language,
            stack: ParseStack::new(),
            lookahead: None,
            next_lookahead: None,
            tracer: Box::new(NoopTracer),
        }
    }

    pub fn set_tracer(&mut self, tracer: Box<dyn Tracer>) {
        self.tracer = tracer;
    }

    pub fn language(&self) -> &L {
        &self.language
    }

    /// Parse `input`, optionally reusing the stack from a prior call given
    /// the earliest point `edit` disturbed. Always returns a tree: parse
    /// errors materialize as `SYM_ERROR` nodes rather than a `Result`.
    pub fn parse(&mut self, input: &str, edit: Option<Edit>) -> Node {
        let restart = self.breakdown_stack(edit);
        let mut lexer = Lexer::new(input);
        lexer.reset(restart.bytes as usize, restart);
        self.next_lookahead = None;

        loop {
            let state = self.stack.top_state();
            if self.lookahead.is_none() {
                self.lex(&mut lexer, state);
            }
            let symbol = self.lookahead.as_ref().expect("lex always fills lookahead").symbol();
            let action = self.language.action(state, symbol);
            match action {
                Action::Shift { to_state } => self.shift(to_state),
                Action::ShiftExtra => self.shift_extra(),
                Action::Reduce { symbol, child_count } => self.reduce(symbol, child_count),
                Action::ReduceExtra { symbol } => self.reduce_extra(symbol),
                Action::Accept => {
                    self.tracer.trace("ACCEPT");
                    return self.get_root();
                }
                Action::Error => {
                    self.tracer.trace("ERROR");
                    if self.handle_error(&mut lexer).is_err() {
                        return self.get_root();
                    }
                }
            }
        }
    }

    fn lex(&mut self, lexer: &mut Lexer<'_>, state: harrow_core::StateId) {
        let lex_state = self.language.lex_state(state);
        let node = match self.lex_one(lexer, lex_state) {
            Some(token) => token,
            // A failed lex attempt never commits a partial advance (see
            // `Lexer::lex_with`), so reaching here means truly no input
            // remains: synthesize the zero-width end-of-input token.
            None => Node::leaf(SYM_END, Length::ZERO, Length::ZERO, false),
        };
        self.tracer
            .trace(&format!("LOOKAHEAD {}", self.language.symbol_name(node.symbol())));
        self.lookahead = Some(node);
    }

    fn lex_one(&mut self, lexer: &mut Lexer<'_>, lex_state: harrow_core::LexStateId) -> Option<Node> {
        let language = &self.language;
        let token = lexer.lex_with(lex_state, |cursor, lex_state| language.lex(cursor, lex_state))?;
        Some(Node::leaf(token.symbol, token.padding, token.size, false))
    }

    /// Reuse the longest valid prefix of the previous stack that ends
    /// strictly before `edit.position`. With no edit, discards everything.
    fn breakdown_stack(&mut self, edit: Option<Edit>) -> Length {
        let Some(edit) = edit else {
            self.stack.shrink(0);
            return Length::ZERO;
        };

        loop {
            if self.stack.is_empty() {
                break;
            }
            let right_position = self.stack.right_position();
            let top = self.stack.top_node().expect("checked non-empty").clone();
            if right_position < edit.position && top.is_leaf() {
                self.tracer.trace("RESUME");
                break;
            }

            let depth = self.stack.len();
            self.stack.shrink(depth - 1);
            self.tracer.trace("POP");

            for child in top.children() {
                if self.stack.right_position() >= edit.position {
                    break;
                }
                let top_state = self.stack.top_state();
                let to_state = match self.language.action(top_state, child.symbol()) {
                    Action::Shift { to_state } => to_state,
                    _ => top_state,
                };
                self.stack.push(to_state, child.clone());
                self.tracer.trace("PUT BACK");
            }
        }

        self.stack.right_position()
    }

    fn shift(&mut self, to_state: harrow_core::StateId) {
        let node = self.lookahead.take().expect("shift requires a lookahead");
        let state = if node.is_extra() { self.stack.top_state() } else { to_state };
        self.tracer
            .trace(&format!("SHIFT {}", self.language.symbol_name(node.symbol())));
        self.stack.push(state, node);
        self.lookahead = self.next_lookahead.take();
    }

    fn shift_extra(&mut self) {
        let node = self.lookahead.take().expect("shift_extra requires a lookahead");
        self.lookahead = Some(node.marked_extra(true));
        self.shift(0);
    }

    fn reduce(&mut self, symbol: Symbol, child_count: u16) {
        self.next_lookahead = self.lookahead.take();

        let mut total = 0usize;
        let mut visible = 0usize;
        while visible < child_count as usize && total < self.stack.len() {
            let idx = self.stack.len() - 1 - total;
            let (_, node) = self.stack.entry_at(idx);
            total += 1;
            if !node.is_extra() {
                visible += 1;
            }
        }

        let start = self.stack.len() - total;
        let children: Vec<Node> = (start..self.stack.len())
            .map(|i| self.stack.entry_at(i).1.clone())
            .collect();
        self.stack.shrink(start);

        let node = Node::internal(symbol, children, false);
        self.tracer
            .trace(&format!("REDUCE {}", self.language.symbol_name(node.symbol())));
        self.lookahead = Some(node);
    }

    fn reduce_extra(&mut self, symbol: Symbol) {
        self.reduce(symbol, 1);
        let node = self.lookahead.take().expect("reduce always sets lookahead");
        self.tracer
            .trace(&format!("REDUCE EXTRA {}", self.language.symbol_name(node.symbol())));
        self.lookahead = Some(node.marked_extra(true));
    }

    /// Search for a recovery point, widening the error span by re-lexing in
    /// `LEX_STATE_ERROR` until one is found or input is exhausted.
    fn handle_error(&mut self, lexer: &mut Lexer<'_>) -> Result<(), ()> {
        let triggering = self.lookahead.clone().expect("handle_error requires a lookahead");
        let mut error_node = Node::leaf(SYM_ERROR, triggering.padding(), Length::ZERO, false);

        loop {
            if let Some((idx, to_state)) = self.find_recovery_point() {
                self.stack.shrink(idx + 1);
                let resolved = self.lookahead.take().expect("recovery candidate present");
                self.lookahead = Some(resolved.with_padding(Length::ZERO));

                let size = lexer.token_start_position() - self.stack.right_position() - error_node.padding();
                error_node = error_node.with_size(size);

                self.tracer.trace("RECOVER");
                self.stack.push(to_state, error_node);
                return Ok(());
            }

            self.lookahead = None;
            loop {
                match self.lex_one(lexer, LEX_STATE_ERROR) {
                    Some(node) => {
                        self.tracer
                            .trace(&format!("LEX AGAIN {}", self.language.symbol_name(node.symbol())));
                        self.lookahead = Some(node);
                        break;
                    }
                    None => {
                        if lexer.at_eof() || !lexer.advance() {
                            self.tracer.trace("FAIL TO RECOVER");
                            let size = lexer.current_position() - self.stack.right_position() - error_node.padding();
                            error_node = error_node.with_size(size);
                            self.stack.push(0, error_node);
                            return Err(());
                        }
                    }
                }
            }
        }
    }

    /// Scan the stack top to bottom for an entry whose state shifts on
    /// `SYM_ERROR` into a state that also accepts the current lookahead.
    fn find_recovery_point(&self) -> Option<(usize, harrow_core::StateId)> {
        let symbol = self.lookahead.as_ref()?.symbol();
        if self.stack.is_empty() {
            return None;
        }
        let top = self.stack.len() - 1;
        for (depth, (state, _)) in self.stack.iter_from_top().enumerate() {
            if let Action::Shift { to_state: err_state } = self.language.action(state, SYM_ERROR) {
                if !matches!(self.language.action(err_state, symbol), Action::Error) {
                    return Some((top - depth, err_state));
                }
            }
        }
        None
    }

    /// Collapse whatever remains on the stack into a single root document
    /// node, called on `Accept` or when recovery is exhausted.
    fn get_root(&mut self) -> Node {
        if self.stack.is_empty() {
            self.stack.push(0, Node::leaf(SYM_ERROR, Length::ZERO, Length::ZERO, false));
        }
        let count = self.stack.len();
        self.next_lookahead = None;
        self.lookahead = None;
        self.reduce(SYM_DOCUMENT, count as u16);
        self.shift(0);
        self.stack.top_node().expect("just shifted the root").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harrow_core::{Point, StateId, LexStateId};
    use harrow_lexer::{Cursor, LanguageLexer};
    use harrow_table::{CompiledLanguage, SymbolMetadata};

    // Grammar: S -> a b c | a ERROR c, over single-char tokens 'a','b','c'.
    // Symbols: 0=ERROR,1=DOCUMENT,2=END,3=a,4=b,5=c,6=S,7=UNKNOWN
    const SYM_A: Symbol = 3;
    const SYM_B: Symbol = 4;
    const SYM_C: Symbol = 5;
    const SYM_S: Symbol = 6;
    const SYM_UNKNOWN: Symbol = 7;

    // States: 0=start, 1=after a, 2=after a b, 3=after a b c (reduce on END),
    // 4=after a ERROR (recovery landing pad), 5=after a ERROR c (reduce on END),
    // 6=after S shifted (accept on END).
    struct ToyLexer;
    impl LanguageLexer for ToyLexer {
        // Every non-space character lexes to something, recognized or not —
        // only true end of input returns `None` — matching a real lex state,
        // which always recognizes some token while any input remains.
        fn lex(&self, cursor: &mut Cursor, _lex_state: LexStateId) -> Option<Symbol> {
            while cursor.peek_char() == Some(' ') {
                cursor.skip_char();
            }
            let ch = cursor.peek_char()?;
            cursor.mark_start();
            cursor.bump_char();
            match ch {
                'a' => Some(SYM_A),
                'b' => Some(SYM_B),
                'c' => Some(SYM_C),
                _ => Some(SYM_UNKNOWN),
            }
        }
    }

    fn toy_table() -> CompiledLanguage {
        let symbols = vec![
            SymbolMetadata { name: "ERROR".into(), is_hidden: false },
            SymbolMetadata { name: "document".into(), is_hidden: false },
            SymbolMetadata { name: "END".into(), is_hidden: false },
            SymbolMetadata { name: "a".into(), is_hidden: false },
            SymbolMetadata { name: "b".into(), is_hidden: false },
            SymbolMetadata { name: "c".into(), is_hidden: false },
            SymbolMetadata { name: "S".into(), is_hidden: false },
            SymbolMetadata { name: "UNKNOWN".into(), is_hidden: false },
        ];
        let symbol_count = symbols.len();
        let state_count = 7;
        let mut table = vec![Action::Error; state_count * symbol_count];
        let mut set = |state: StateId, symbol: Symbol, action: Action| {
            table[state as usize * symbol_count + symbol as usize] = action;
        };

        set(0, SYM_A, Action::Shift { to_state: 1 });
        set(0, SYM_S, Action::Shift { to_state: 6 });
        set(1, SYM_B, Action::Shift { to_state: 2 });
        set(1, SYM_ERROR, Action::Shift { to_state: 4 });
        set(2, SYM_C, Action::Shift { to_state: 3 });
        set(3, SYM_END, Action::Reduce { symbol: SYM_S, child_count: 3 });
        set(4, SYM_C, Action::Shift { to_state: 5 });
        set(5, SYM_END, Action::Reduce { symbol: SYM_S, child_count: 3 });
        set(6, SYM_END, Action::Accept);

        let lex_states = vec![0; state_count];
        CompiledLanguage::new(state_count, symbols, table, lex_states).unwrap()
    }

    fn parser() -> Parser<crate::language::StaticLanguage<ToyLexer>> {
        let language = crate::language::StaticLanguage::new(toy_table(), ToyLexer);
        Parser::new(language)
    }

    /// Find `target`'s own text (excluding its padding) by walking the tree
    /// from `root` and tracking the running absolute byte offset — a
    /// node's `padding`/`size` are deltas relative to where the previous
    /// node left off, not absolute offsets into the source.
    fn find_text<'a>(input: &'a str, root: &Node, target: &Node, offset: &mut usize) -> Option<&'a str> {
        if root.ptr_eq(target) {
            let start = *offset + root.padding().bytes as usize;
            let end = start + root.size().bytes as usize;
            return Some(&input[start..end]);
        }
        if root.is_leaf() {
            *offset += root.total_size().bytes as usize;
            return None;
        }
        for child in root.children() {
            if let Some(found) = find_text(input, child, target, offset) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn accepts_the_happy_path() {
        let mut p = parser();
        let root = p.parse("abc", None);
        assert_eq!(root.symbol(), SYM_DOCUMENT);
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].symbol(), SYM_S);
    }

    #[test]
    fn recovers_via_error_production() {
        let mut p = parser();
        let input = "axc";
        let root = p.parse(input, None);
        assert_eq!(root.symbol(), SYM_DOCUMENT);
        let s = &root.children()[0];
        assert_eq!(s.symbol(), SYM_S);
        let err = s.children().iter().find(|c| c.symbol() == SYM_ERROR).unwrap();
        assert_eq!(err.size().bytes, 1);
        let mut offset = 0;
        assert_eq!(find_text(input, &root, err, &mut offset), Some("x"));
    }

    #[test]
    fn empty_input_yields_zero_width_error() {
        let mut p = parser();
        let root = p.parse("", None);
        assert_eq!(root.symbol(), SYM_DOCUMENT);
        assert_eq!(root.total_size(), Length::ZERO);
    }

    #[test]
    fn right_position_tracks_point_not_just_bytes() {
        let mut p = parser();
        let root = p.parse("abc", None);
        assert_eq!(root.total_size().point, Point { row: 0, column: 3 });
    }

    #[test]
    fn unrecoverable_input_still_covers_everything() {
        // "ab" never reaches 'c': recovery finds no landing pad that
        // accepts END (see state 4's table row), and re-lexing in the
        // error state hits true end of input immediately. Finalization
        // wraps whatever is left on the stack as-is, with no further
        // reduction into `S` — there was no successful recovery to resume
        // normal dispatch after.
        let mut p = parser();
        let root = p.parse("ab", None);
        assert_eq!(root.symbol(), SYM_DOCUMENT);
        assert_eq!(root.children().len(), 3);
        assert_eq!(root.children()[0].symbol(), SYM_A);
        assert_eq!(root.children()[1].symbol(), SYM_B);
        let error = &root.children()[2];
        assert_eq!(error.symbol(), SYM_ERROR);
        assert_eq!(error.size(), Length::ZERO);
        assert_eq!(root.total_size(), Length { bytes: 2, point: Point { row: 0, column: 2 } });
    }
}
