//! Distance heuristics for the informed strategies.

use gridsearch_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-directional unit-cost movement, which
/// is what makes A* with this heuristic return a shortest path.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
