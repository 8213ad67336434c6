//! Per-invocation search telemetry.

use std::time::Instant;

use gridsearch_core::Cell;

use crate::result::SearchResult;

/// Accumulates visitation order, frontier snapshots, and wall-clock timing
/// for a single search invocation.
///
/// A fresh `Tracker` is constructed per `search` call, so telemetry can
/// never leak between runs.
#[derive(Debug, Default)]
pub struct Tracker {
    visited_order: Vec<Cell>,
    frontier_history: Vec<Vec<Cell>>,
    started: Option<Instant>,
    elapsed: f64,
}

impl Tracker {
    /// Create an empty tracker with a zeroed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin timing the search call.
    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop timing. A stop without a prior start leaves the timer at zero.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed().as_secs_f64();
        }
    }

    /// Record a cell as explored (popped and finalized).
    pub fn record_explored(&mut self, cell: Cell) {
        self.visited_order.push(cell);
    }

    /// Record the frontier contents before a pop. The snapshot is collected
    /// into owned storage here, so it never aliases the live frontier.
    pub fn record_frontier(&mut self, snapshot: impl IntoIterator<Item = Cell>) {
        self.frontier_history.push(snapshot.into_iter().collect());
    }

    /// Consume the accumulated telemetry into a [`SearchResult`].
    pub fn finalize(self, path: Vec<Cell>, success: bool) -> SearchResult {
        SearchResult::new(
            path,
            self.visited_order,
            self.frontier_history,
            self.elapsed,
            success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_packages_telemetry() {
        let mut t = Tracker::new();
        t.start_timer();
        t.record_frontier([Cell::new(0, 0)]);
        t.record_explored(Cell::new(0, 0));
        t.stop_timer();
        let r = t.finalize(vec![Cell::new(0, 0)], true);
        assert_eq!(r.visited_order, vec![Cell::new(0, 0)]);
        assert_eq!(r.frontier_history, vec![vec![Cell::new(0, 0)]]);
        assert!(r.success);
        assert!(r.execution_time >= 0.0);
    }

    #[test]
    fn stop_without_start_stays_zero() {
        let mut t = Tracker::new();
        t.stop_timer();
        let r = t.finalize(Vec::new(), false);
        assert_eq!(r.execution_time, 0.0);
    }

    #[test]
    fn snapshot_is_an_owned_copy() {
        let mut t = Tracker::new();
        let mut frontier = vec![Cell::new(0, 0), Cell::new(0, 1)];
        t.record_frontier(frontier.iter().copied());
        frontier.clear();
        let r = t.finalize(Vec::new(), false);
        assert_eq!(r.frontier_history[0].len(), 2);
    }
}
