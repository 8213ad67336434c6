//! The immutable [`Grid`] occupancy map.
//!
//! A `Grid` is fixed at construction: searches and renderers only ever read
//! it, so any number of them may share one grid by reference.

use crate::error::GridError;
use crate::geom::Cell;

/// Occupancy state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Wall,
}

/// The four cardinal steps in the canonical enumeration order:
/// right, left, down, up.
///
/// This order is load-bearing. Every algorithm that iterates neighbors in
/// declared order inherits its tie-break behaviour from it, so it must not
/// change.
const DIRS: [Cell; 4] = [
    Cell::new(0, 1),  // right
    Cell::new(0, -1), // left
    Cell::new(1, 0),  // down
    Cell::new(-1, 0), // up
];

/// An immutable rectangular occupancy grid.
///
/// Cells are stored row-major. The grid is never mutated after
/// construction; generators build the full cell buffer first and freeze it
/// with [`Grid::from_cells`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell [`CellState::Free`].
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Free; rows * cols],
        })
    }

    /// Freeze a row-major cell buffer into a grid.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != rows * cols {
            return Err(GridError::Shape {
                len: cells.len(),
                rows,
                cols,
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from rows of bits, where `0` is free and any other
    /// value is a wall.
    pub fn from_bits(rows: &[&[u8]]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::Empty);
        }
        let cols = rows[0].len();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(GridError::Shape {
                    len: row.len(),
                    rows: rows.len(),
                    cols,
                });
            }
            cells.extend(row.iter().map(|&b| {
                if b == 0 {
                    CellState::Free
                } else {
                    CellState::Wall
                }
            }));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Checked cell-state accessor. `None` when out of bounds.
    #[inline]
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(self.cells[cell.row as usize * self.cols + cell.col as usize])
    }

    /// Whether `cell` is free.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds; callers check [`Self::in_bounds`]
    /// first.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        assert!(self.in_bounds(cell), "cell {cell} out of bounds");
        self.cells[cell.row as usize * self.cols + cell.col as usize] == CellState::Free
    }

    /// Append the in-bounds, free cardinal neighbors of `cell` to `buf`,
    /// in the canonical order right, left, down, up.
    ///
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>) {
        for d in DIRS {
            let n = cell + d;
            if self.in_bounds(n) && self.is_free(n) {
                buf.push(n);
            }
        }
    }

    /// Like [`Self::neighbors`], but enumerating in the reversed order up,
    /// down, left, right.
    ///
    /// A last-in-first-out frontier pops its most recent push first, so
    /// reversing the enumeration preserves the canonical right-first
    /// expansion bias for depth-first search.
    pub fn neighbors_rev(&self, cell: Cell, buf: &mut Vec<Cell>) {
        for d in DIRS.iter().rev() {
            let n = cell + *d;
            if self.in_bounds(n) && self.is_free(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_empty_dimensions() {
        assert_eq!(Grid::open(0, 5).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::open(5, 0).unwrap_err(), GridError::Empty);
        assert!(Grid::open(1, 1).is_ok());
    }

    #[test]
    fn from_cells_checks_shape() {
        let err = Grid::from_cells(2, 2, vec![CellState::Free; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::Shape {
                len: 3,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn from_bits_marks_walls() {
        let g = Grid::from_bits(&[&[0, 1], &[0, 0]]).unwrap();
        assert_eq!(g.state(Cell::new(0, 1)), Some(CellState::Wall));
        assert_eq!(g.state(Cell::new(1, 0)), Some(CellState::Free));
        assert_eq!(g.state(Cell::new(2, 0)), None);
    }

    #[test]
    fn neighbors_in_canonical_order() {
        let g = Grid::open(3, 3).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Cell::new(1, 1), &mut buf);
        // right, left, down, up
        assert_eq!(
            buf,
            vec![
                Cell::new(1, 2),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbors_rev_is_exact_reverse() {
        let g = Grid::open(3, 3).unwrap();
        let (mut fwd, mut rev) = (Vec::new(), Vec::new());
        g.neighbors(Cell::new(1, 1), &mut fwd);
        g.neighbors_rev(Cell::new(1, 1), &mut rev);
        fwd.reverse();
        assert_eq!(fwd, rev);
    }

    #[test]
    fn neighbors_skip_walls_and_bounds() {
        let g = Grid::from_bits(&[&[0, 1], &[0, 0]]).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Cell::new(0, 0), &mut buf);
        // (0,1) is a wall, (0,-1) and (-1,0) are out of bounds.
        assert_eq!(buf, vec![Cell::new(1, 0)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = Grid::open(1, 1).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Cell::ZERO, &mut buf);
        assert!(buf.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_bits(&[&[0, 1, 0], &[0, 0, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
