//! Helpers shared by both search engines.

use std::collections::HashMap;

use gridsearch_core::{Cell, Grid, GridError};

/// Validate that both endpoints lie inside the grid.
pub(crate) fn validate_endpoints(grid: &Grid, start: Cell, goal: Cell) -> Result<(), GridError> {
    for cell in [start, goal] {
        if !grid.in_bounds(cell) {
            return Err(GridError::OutOfBounds {
                cell,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
    }
    Ok(())
}

/// Walk parent pointers from the goal back to the start, then reverse.
///
/// The start cell has no parent entry, which terminates the walk; when
/// start equals goal the path is the single cell.
pub(crate) fn reconstruct_path(parent: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = parent.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_parents() {
        let mut parent = HashMap::new();
        parent.insert(Cell::new(0, 1), Cell::new(0, 0));
        parent.insert(Cell::new(0, 2), Cell::new(0, 1));
        let path = reconstruct_path(&parent, Cell::new(0, 2));
        assert_eq!(
            path,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
    }

    #[test]
    fn reconstruct_trivial_path() {
        let parent = HashMap::new();
        assert_eq!(
            reconstruct_path(&parent, Cell::new(3, 3)),
            vec![Cell::new(3, 3)]
        );
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        let grid = Grid::open(2, 2).unwrap();
        let err =
            validate_endpoints(&grid, Cell::new(0, 0), Cell::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                cell: Cell::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert!(validate_endpoints(&grid, Cell::new(0, 0), Cell::new(1, 1)).is_ok());
    }
}
