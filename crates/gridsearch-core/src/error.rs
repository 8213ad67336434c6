//! Error types for grid construction and search entry.

use thiserror::Error;

use crate::geom::Cell;

/// Errors raised by [`Grid`](crate::Grid) construction and by search entry
/// validation.
///
/// An unreachable goal is deliberately *not* represented here: exhausting
/// the frontier without reaching the goal is a normal terminal outcome,
/// reported as data on the search result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("cell buffer of length {len} does not match a {rows}x{cols} grid")]
    Shape { len: usize, rows: usize, cols: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = GridError::OutOfBounds {
            cell: Cell::new(5, 5),
            rows: 3,
            cols: 4,
        };
        assert_eq!(err.to_string(), "cell (5, 5) is outside the 3x4 grid");
    }
}
