//! **gridsearch-core** — Occupancy-grid primitives for grid search.
//!
//! This crate provides the foundational types used across the *gridsearch*
//! workspace: the [`Cell`] coordinate type, the immutable [`Grid`] occupancy
//! map with its cardinal-neighbor queries, and the [`GridError`] taxonomy.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Cell;
pub use grid::{CellState, Grid};
