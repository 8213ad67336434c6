//! The uninformed strategies: breadth-first and depth-first search.
//!
//! Both run the same engine over a [`Frontier`] discipline; the only other
//! difference is neighbor enumeration order. The stack discipline pops its
//! most recent push first, so DFS enumerates neighbors reversed (up, down,
//! left, right) to keep the canonical right-first expansion bias.

use std::collections::{HashMap, HashSet};

use gridsearch_core::{Cell, Grid, GridError};

use crate::frontier::{Fifo, Frontier, Lifo};
use crate::result::SearchResult;
use crate::tracker::Tracker;
use crate::util::{reconstruct_path, validate_endpoints};

/// Breadth-first search from `start` to `goal`.
///
/// Explores level by level; on success the path is a shortest one.
pub fn bfs(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult, GridError> {
    run(grid, start, goal, Fifo::default(), false)
}

/// Depth-first search from `start` to `goal`.
///
/// Goes as deep as possible before backtracking. No shortest-path
/// guarantee.
pub fn dfs(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult, GridError> {
    run(grid, start, goal, Lifo::default(), true)
}

fn run<F: Frontier>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    mut frontier: F,
    reversed: bool,
) -> Result<SearchResult, GridError> {
    validate_endpoints(grid, start, goal)?;

    let mut tracker = Tracker::new();
    tracker.start_timer();

    frontier.push(start);
    let mut visited: HashSet<Cell> = HashSet::from([start]);
    let mut parent: HashMap<Cell, Cell> = HashMap::new();
    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

    loop {
        // Snapshot before popping; only recorded once the pop succeeds, so
        // history stays in lockstep with the visitation order.
        let snapshot: Vec<Cell> = frontier.iter().collect();
        let Some(cur) = frontier.pop() else {
            tracker.stop_timer();
            return Ok(tracker.finalize(Vec::new(), false));
        };
        tracker.record_frontier(snapshot);
        tracker.record_explored(cur);

        if cur == goal {
            tracker.stop_timer();
            let path = reconstruct_path(&parent, goal);
            return Ok(tracker.finalize(path, true));
        }

        nbuf.clear();
        if reversed {
            grid.neighbors_rev(cur, &mut nbuf);
        } else {
            grid.neighbors(cur, &mut nbuf);
        }

        for &n in &nbuf {
            if visited.insert(n) {
                parent.insert(n, cur);
                frontier.push(n);
            }
        }
    }
}
