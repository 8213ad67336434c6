//! The [`Algorithm`] selector — run-by-name dispatch for comparison
//! drivers.

use std::fmt;

use gridsearch_core::{Cell, Grid, GridError};

use crate::best_first::{astar, greedy};
use crate::result::SearchResult;
use crate::uninformed::{bfs, dfs};

/// One of the four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Greedy,
    AStar,
}

impl Algorithm {
    /// All strategies, in the conventional comparison order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    /// Run this strategy on `grid` from `start` to `goal`.
    pub fn run(
        self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchResult, GridError> {
        match self {
            Algorithm::Bfs => bfs(grid, start, goal),
            Algorithm::Dfs => dfs(grid, start, goal),
            Algorithm::Greedy => greedy(grid, start, goal),
            Algorithm::AStar => astar(grid, start, goal),
        }
    }

    /// Whether a successful run is guaranteed to yield a shortest path.
    pub const fn guarantees_shortest_path(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::AStar)
    }

    /// The conventional display label.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Greedy => "GBFS",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_strategies_agree_on_an_open_grid() {
        let g = Grid::open(3, 3).unwrap();
        for alg in Algorithm::ALL {
            let r = alg.run(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
            assert!(r.success, "{alg} failed");
            if alg.guarantees_shortest_path() {
                assert_eq!(r.path_length, 5, "{alg} not optimal");
            } else {
                assert!(r.path_length >= 5, "{alg} shorter than optimal");
            }
        }
    }

    #[test]
    fn all_strategies_report_blocked_barrier_as_failure() {
        let g = Grid::from_bits(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
        ])
        .unwrap();
        for alg in Algorithm::ALL {
            let r = alg.run(&g, Cell::new(0, 0), Cell::new(2, 3)).unwrap();
            assert!(!r.success, "{alg} claimed success");
            assert!(r.path.is_empty());
            assert_eq!(r.explored_count, 4, "{alg} explored count");
            assert_eq!(r.frontier_history.len(), r.visited_order.len());
        }
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels, vec!["BFS", "DFS", "GBFS", "A*"]);
    }
}
