//! The informed strategies: greedy best-first and A*.
//!
//! One generic engine runs both; they differ only in the priority policy
//! fed to the binary heap. A* orders by f(n) = g(n) + h(n) and, with an
//! admissible heuristic, returns a shortest path. Greedy orders by h(n)
//! alone and trades optimality for speed toward the goal.

use std::collections::{BinaryHeap, HashMap, HashSet};

use gridsearch_core::{Cell, Grid, GridError};

use crate::heuristic::manhattan;
use crate::result::SearchResult;
use crate::tracker::Tracker;
use crate::util::{reconstruct_path, validate_endpoints};

/// A* search with the Manhattan heuristic.
pub fn astar(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult, GridError> {
    astar_with(grid, start, goal, manhattan)
}

/// A* search with a caller-supplied heuristic `h(cell, goal)`.
///
/// The heuristic must be admissible for the shortest-path guarantee to
/// hold.
pub fn astar_with<H>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    h: H,
) -> Result<SearchResult, GridError>
where
    H: Fn(Cell, Cell) -> i32,
{
    best_first(grid, start, goal, |g, cell, goal| g + h(cell, goal))
}

/// Greedy best-first search with the Manhattan heuristic.
pub fn greedy(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult, GridError> {
    greedy_with(grid, start, goal, manhattan)
}

/// Greedy best-first search with a caller-supplied heuristic.
///
/// Prioritizes by the heuristic alone, ignoring accumulated cost. No
/// shortest-path guarantee.
pub fn greedy_with<H>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    h: H,
) -> Result<SearchResult, GridError>
where
    H: Fn(Cell, Cell) -> i32,
{
    best_first(grid, start, goal, |_g, cell, goal| h(cell, goal))
}

/// Heap entry, ordered for a min-heap on (priority, seq).
///
/// `seq` is a strictly increasing insertion counter local to one search
/// call: ties in priority pop in first-in-first-out order, which makes
/// exploration deterministic for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    priority: i32,
    seq: u64,
    cell: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // then smallest seq.
        other
            .priority
            .cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier contents in pop-preference order: ascending priority, then
/// insertion order. Stale duplicate entries are included, as they are
/// genuinely still in the frontier.
fn snapshot(heap: &BinaryHeap<Entry>) -> Vec<Cell> {
    let mut entries: Vec<&Entry> = heap.iter().collect();
    entries.sort_by_key(|e| (e.priority, e.seq));
    entries.into_iter().map(|e| e.cell).collect()
}

/// Shared priority-search engine.
///
/// `priority(g, cell, goal)` maps a tentative g-cost and a cell to its
/// frontier priority. Uniform step cost 1. A cell is pushed or re-pushed
/// only when its tentative g-cost strictly improves on the recorded one
/// (standard relaxation); already-finalized cells are skipped on pop.
fn best_first<F>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    priority: F,
) -> Result<SearchResult, GridError>
where
    F: Fn(i32, Cell, Cell) -> i32,
{
    validate_endpoints(grid, start, goal)?;

    let mut tracker = Tracker::new();
    tracker.start_timer();

    let mut heap: BinaryHeap<Entry> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut g_cost: HashMap<Cell, i32> = HashMap::from([(start, 0)]);
    let mut visited: HashSet<Cell> = HashSet::new();
    let mut parent: HashMap<Cell, Cell> = HashMap::new();
    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

    heap.push(Entry {
        priority: priority(0, start, goal),
        seq,
        cell: start,
    });

    loop {
        let pre_pop = snapshot(&heap);
        let Some(entry) = heap.pop() else {
            tracker.stop_timer();
            return Ok(tracker.finalize(Vec::new(), false));
        };
        let cur = entry.cell;

        // Stale duplicate: the cell was finalized via a better entry.
        if !visited.insert(cur) {
            continue;
        }
        tracker.record_frontier(pre_pop);
        tracker.record_explored(cur);

        if cur == goal {
            tracker.stop_timer();
            let path = reconstruct_path(&parent, goal);
            return Ok(tracker.finalize(path, true));
        }

        let Some(&cur_g) = g_cost.get(&cur) else {
            continue;
        };

        nbuf.clear();
        grid.neighbors(cur, &mut nbuf);

        for &n in &nbuf {
            if visited.contains(&n) {
                continue;
            }
            let new_g = cur_g + 1;
            if let Some(&old_g) = g_cost.get(&n) {
                if new_g >= old_g {
                    continue;
                }
            }
            g_cost.insert(n, new_g);
            parent.insert(n, cur);
            seq += 1;
            heap.push(Entry {
                priority: priority(new_g, n, goal),
                seq,
                cell: n,
            });
        }
    }
}
