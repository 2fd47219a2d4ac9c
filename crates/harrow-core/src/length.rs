//! Two-dimensional source positions.
//!
//! Every size, padding, and cursor position the crate family deals with is a
//! [`Length`]: a byte count paired with the row/column it corresponds to.
//! Keeping both in the same value means a lexer or the driver never has to
//! re-derive one from the other by rescanning text.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A row/column position, zero-indexed, columns counted in `char`s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub row: u32,
    pub column: u32,
}

impl Point {
    pub const ZERO: Point = Point { row: 0, column: 0 };
}

/// A byte count paired with the [`Point`] it corresponds to.
///
/// `Length` values compose by addition the way text concatenation does: if
/// the length being added spans at least one newline, the sum's column comes
/// from the addend (the row carries and the column resets); otherwise the
/// columns add. Subtraction undoes this: two lengths on the same row yield a
/// column delta, while subtracting across rows keeps the minuend's column,
/// since the row boundary already accounts for the difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Length {
    pub bytes: u32,
    pub point: Point,
}

impl Length {
    pub const ZERO: Length = Length {
        bytes: 0,
        point: Point::ZERO,
    };

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The length of a single character, as consumed by a lexer cursor.
    pub fn of_char(ch: char) -> Self {
        let point = if ch == '\n' {
            Point { row: 1, column: 0 }
        } else {
            Point { row: 0, column: 1 }
        };
        Length {
            bytes: ch.len_utf8() as u32,
            point,
        }
    }
}

fn point_add(a: Point, b: Point) -> Point {
    if b.row > 0 {
        Point {
            row: a.row + b.row,
            column: b.column,
        }
    } else {
        Point {
            row: a.row,
            column: a.column + b.column,
        }
    }
}

fn point_sub(a: Point, b: Point) -> Point {
    if a.row == b.row {
        Point {
            row: 0,
            column: a.column - b.column,
        }
    } else {
        Point {
            row: a.row - b.row,
            column: a.column,
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length {
            bytes: self.bytes + rhs.bytes,
            point: point_add(self.point, rhs.point),
        }
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length {
            bytes: self.bytes - rhs.bytes,
            point: point_sub(self.point, rhs.point),
        }
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Length {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_identity() {
        let a = Length {
            bytes: 7,
            point: Point { row: 1, column: 2 },
        };
        assert_eq!(a + Length::ZERO, a);
        assert_eq!(a - Length::ZERO, a);
    }

    #[test]
    fn add_same_row_sums_columns() {
        let a = Length {
            bytes: 3,
            point: Point { row: 0, column: 3 },
        };
        let b = Length {
            bytes: 2,
            point: Point { row: 0, column: 2 },
        };
        let sum = a + b;
        assert_eq!(sum.bytes, 5);
        assert_eq!(sum.point, Point { row: 0, column: 5 });
    }

    #[test]
    fn add_crossing_newline_resets_column() {
        let a = Length {
            bytes: 3,
            point: Point { row: 0, column: 3 },
        };
        let newline_then_two = Length {
            bytes: 3,
            point: Point { row: 1, column: 2 },
        };
        let sum = a + newline_then_two;
        assert_eq!(sum.point, Point { row: 1, column: 2 });
    }

    #[test]
    fn sub_same_row_yields_column_delta() {
        let whole = Length {
            bytes: 5,
            point: Point { row: 0, column: 5 },
        };
        let prefix = Length {
            bytes: 3,
            point: Point { row: 0, column: 3 },
        };
        let rest = whole - prefix;
        assert_eq!(rest.bytes, 2);
        assert_eq!(rest.point, Point { row: 0, column: 2 });
    }

    #[test]
    fn sub_across_rows_keeps_minuend_column() {
        let whole = Length {
            bytes: 10,
            point: Point { row: 2, column: 4 },
        };
        let prefix = Length {
            bytes: 6,
            point: Point { row: 1, column: 0 },
        };
        let rest = whole - prefix;
        assert_eq!(rest.bytes, 4);
        assert_eq!(rest.point, Point { row: 1, column: 4 });
    }

    #[test]
    fn of_char_newline_advances_row() {
        assert_eq!(
            Length::of_char('\n').point,
            Point { row: 1, column: 0 }
        );
        assert_eq!(Length::of_char('a').point, Point { row: 0, column: 1 });
        assert_eq!(Length::of_char('é').bytes, 2);
    }

    #[test]
    fn ordering_follows_byte_count() {
        let a = Length {
            bytes: 2,
            point: Point::ZERO,
        };
        let b = Length {
            bytes: 5,
            point: Point::ZERO,
        };
        assert!(a < b);
    }

    #[test]
    fn postcard_round_trips() {
        let value = Length {
            bytes: 42,
            point: Point { row: 3, column: 9 },
        };
        let bytes = postcard::to_allocvec(&value).unwrap();
        let decoded: Length = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(value, decoded);
    }
}
