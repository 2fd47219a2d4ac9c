use harrow_core::Length;

/// Describes the earliest point an incremental reparse must treat as
/// disturbed. Absent entirely, a parse discards its previous stack and
/// starts over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub position: Length,
}

impl Edit {
    pub fn at(position: Length) -> Self {
        Self { position }
    }
}
