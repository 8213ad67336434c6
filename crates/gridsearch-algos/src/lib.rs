//! **gridsearch-algos** — Graph-search strategies over an occupancy grid.
//!
//! Four strategies share one control skeleton and differ only in frontier
//! ordering policy:
//!
//! - **BFS** — first-in-first-out frontier, shortest path guaranteed
//!   ([`bfs`])
//! - **DFS** — last-in-first-out frontier, no shortest-path guarantee
//!   ([`dfs`])
//! - **GBFS** — greedy best-first, priority is the heuristic alone
//!   ([`greedy`])
//! - **A\*** — priority is g-cost plus heuristic, shortest path guaranteed
//!   with an admissible heuristic ([`astar`])
//!
//! Every run returns a [`SearchResult`] carrying the path plus the full
//! telemetry needed for step-by-step animation: the order cells were
//! explored in and a frontier snapshot per step.
//!
//! | Strategy | Frontier | Priority |
//! |---|---|---|
//! | [`bfs`] | queue | insertion order |
//! | [`dfs`] | stack | insertion order, neighbors reversed |
//! | [`greedy`] | binary heap | h(n) |
//! | [`astar`] | binary heap | g(n) + h(n) |

mod algorithm;
mod best_first;
mod frontier;
mod heuristic;
mod result;
mod tracker;
mod uninformed;
mod util;

pub use algorithm::Algorithm;
pub use best_first::{astar, astar_with, greedy, greedy_with};
pub use heuristic::manhattan;
pub use result::SearchResult;
pub use tracker::Tracker;
pub use uninformed::{bfs, dfs};
