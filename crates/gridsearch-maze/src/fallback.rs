//! The fixed fallback maze.

use gridsearch_core::Grid;

/// Dimensions of the fixed fallback maze.
pub const FALLBACK_ROWS: usize = 10;
pub const FALLBACK_COLS: usize = 15;

/// 10x15 layout known to be solvable from (0, 0) to (9, 14).
const FALLBACK_BITS: [[u8; FALLBACK_COLS]; FALLBACK_ROWS] = [
    [0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0],
    [0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// A fresh copy of the fixed known-solvable maze.
///
/// Callers that want to skip random generation entirely use this directly.
pub fn fallback_maze() -> Grid {
    let rows: Vec<&[u8]> = FALLBACK_BITS.iter().map(|r| r.as_slice()).collect();
    match Grid::from_bits(&rows) {
        Ok(grid) => grid,
        // The constant layout always has valid shape.
        Err(_) => unreachable!("fallback maze layout is well-formed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::{Cell, CellState};

    #[test]
    fn dimensions_match_the_constants() {
        let g = fallback_maze();
        assert_eq!(g.rows(), FALLBACK_ROWS);
        assert_eq!(g.cols(), FALLBACK_COLS);
    }

    #[test]
    fn corners_are_free() {
        let g = fallback_maze();
        assert_eq!(g.state(Cell::new(0, 0)), Some(CellState::Free));
        assert_eq!(g.state(Cell::new(9, 14)), Some(CellState::Free));
    }

    #[test]
    fn is_solvable() {
        let g = fallback_maze();
        assert!(crate::has_valid_path(&g, Cell::new(0, 0), Cell::new(9, 14)));
    }
}
