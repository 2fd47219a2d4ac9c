//! The binding-list language's parse table.
//!
//! States:
//! - `0` — start of a statement, or the loop point a reduced statement
//!   shifts back into, or end of input.
//! - `1` — after `IDENT`.
//! - `2` — after `IDENT EQUALS`.
//! - `3` — after `IDENT EQUALS NUMBER`.
//! - `4` — after a complete `IDENT EQUALS NUMBER SEMI`; reduces on the next
//!   statement's `IDENT` or on `END`.
//! - `5` — after `IDENT ERROR` (an error-recovered binding).
//! - `6` — after `IDENT ERROR SEMI`; reduces like state `4`.
//!
//! State `0` has no `ERROR` column: a malformed token before any `IDENT`
//! has been committed has nothing on the stack to resynchronize against,
//! so it is left genuinely unrecoverable.

use harrow_core::StateId;
use harrow_table::{Action, CompiledLanguage};

use crate::symbols::{self, COMMENT, END, EQUALS, ERROR, IDENT, NUMBER, SEMI, STATEMENT};

const STATE_COUNT: usize = 7;

pub fn table() -> CompiledLanguage {
    let mut table = vec![Action::Error; STATE_COUNT * symbols::SYMBOL_COUNT];
    let mut set = |state: StateId, symbol: harrow_core::Symbol, action: Action| {
        table[state as usize * symbols::SYMBOL_COUNT + symbol as usize] = action;
    };

    // Comments may interleave anywhere without disturbing the automaton.
    for state in 0..STATE_COUNT as StateId {
        set(state, COMMENT, Action::ShiftExtra);
    }

    set(0, IDENT, Action::Shift { to_state: 1 });
    set(0, STATEMENT, Action::Shift { to_state: 0 });
    set(0, END, Action::Accept);

    set(1, EQUALS, Action::Shift { to_state: 2 });
    set(1, ERROR, Action::Shift { to_state: 5 });

    set(2, NUMBER, Action::Shift { to_state: 3 });
    set(2, ERROR, Action::Shift { to_state: 5 });

    set(3, SEMI, Action::Shift { to_state: 4 });
    set(3, ERROR, Action::Shift { to_state: 5 });

    set(4, IDENT, Action::Reduce { symbol: STATEMENT, child_count: 4 });
    set(4, END, Action::Reduce { symbol: STATEMENT, child_count: 4 });

    set(5, SEMI, Action::Shift { to_state: 6 });

    set(6, IDENT, Action::Reduce { symbol: STATEMENT, child_count: 3 });
    set(6, END, Action::Reduce { symbol: STATEMENT, child_count: 3 });

    let lex_states = vec![0; STATE_COUNT];
    CompiledLanguage::new(STATE_COUNT, symbols::metadata(), table, lex_states)
        .expect("the binding-list table is internally consistent")
}
