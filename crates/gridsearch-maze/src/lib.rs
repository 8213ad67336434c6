//! **gridsearch-maze** — Random solvable-maze generation.
//!
//! [`MazeGen`] samples random occupancy grids and retries until a
//! start-to-goal path is provable by breadth-first search. Generation as a
//! whole never fails: after the retry budget is spent it falls back to a
//! fixed known-solvable maze, or to a forced-corridor maze for other
//! dimensions.

pub mod fallback;
pub mod generator;

pub use fallback::fallback_maze;
pub use generator::{MazeGen, has_valid_path};
