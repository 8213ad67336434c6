//! The [`SearchResult`] record — the output contract of every strategy.

use gridsearch_core::Cell;

/// Everything a single search run produced, packaged for downstream
/// consumers (comparison, rendering, animation).
///
/// Invariants:
/// - `path` is empty iff `success` is false;
/// - on success, `path` starts at the start cell, ends at the goal cell,
///   and consecutive cells are 4-adjacent free cells;
/// - `frontier_history.len() == visited_order.len()` (one pre-pop snapshot
///   per explored cell), so the two can be iterated in lockstep;
/// - `explored_count` and `path_length` are recomputed from the sequences
///   at construction, never set independently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start-to-goal path, both endpoints inclusive. Empty on failure.
    pub path: Vec<Cell>,
    /// Cells in the exact order they were popped and finalized. No cell
    /// appears twice.
    pub visited_order: Vec<Cell>,
    /// Frontier contents immediately before each step's pop.
    pub frontier_history: Vec<Vec<Cell>>,
    /// `visited_order.len()`.
    pub explored_count: usize,
    /// `path.len()` (0 when unsuccessful).
    pub path_length: usize,
    /// Wall-clock seconds spent inside the search call.
    pub execution_time: f64,
    /// Whether the goal was reached.
    pub success: bool,
}

impl SearchResult {
    /// Assemble a result, deriving the summary counts from the sequences.
    pub fn new(
        path: Vec<Cell>,
        visited_order: Vec<Cell>,
        frontier_history: Vec<Vec<Cell>>,
        execution_time: f64,
        success: bool,
    ) -> Self {
        let explored_count = visited_order.len();
        let path_length = path.len();
        Self {
            path,
            visited_order,
            frontier_history,
            explored_count,
            path_length,
            execution_time,
            success,
        }
    }

    /// Iterate explored cells and their pre-pop frontier snapshots in
    /// lockstep, one pair per animation step.
    pub fn steps(&self) -> impl Iterator<Item = (Cell, &[Cell])> {
        self.visited_order
            .iter()
            .copied()
            .zip(self.frontier_history.iter().map(Vec::as_slice))
    }
}
