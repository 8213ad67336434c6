//! Random maze generation with solvability validation.

use gridsearch_algos::bfs;
use gridsearch_core::{Cell, CellState, Grid, GridError};
use log::{info, warn};
use rand::{Rng, RngExt};

use crate::fallback::{FALLBACK_COLS, FALLBACK_ROWS, fallback_maze};

/// Whether a start-to-goal path exists, proven by breadth-first search.
pub fn has_valid_path(grid: &Grid, start: Cell, goal: Cell) -> bool {
    bfs(grid, start, goal).is_ok_and(|r| r.success)
}

/// Random maze generator over a caller-supplied random source.
///
/// Passing the source explicitly keeps generation deterministic under a
/// seeded `Rng` and free of process-wide random state.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Retry budget before falling back to a guaranteed-solvable layout.
    pub const MAX_ATTEMPTS: usize = 100;

    /// Create a generator using `rng` as its random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a solvable `rows` x `cols` maze from the top-left corner to
    /// the bottom-right corner.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        wall_prob: f64,
    ) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let start = Cell::ZERO;
        let goal = Cell::new(rows as i32 - 1, cols as i32 - 1);
        self.generate_between(rows, cols, wall_prob, start, goal)
    }

    /// Generate a solvable maze between explicit endpoints.
    ///
    /// Each cell is sampled as a wall with probability `wall_prob` (clamped
    /// to [0, 1]); the endpoints are forced free. Up to
    /// [`Self::MAX_ATTEMPTS`] samples are validated with breadth-first
    /// search and the first solvable one is returned. If all attempts fail,
    /// generation falls back deterministically instead of erroring: the
    /// fixed maze when the dimensions match it, otherwise a maze with an L
    /// corridor (first column plus last row) forced free.
    pub fn generate_between(
        &mut self,
        rows: usize,
        cols: usize,
        wall_prob: f64,
        start: Cell,
        goal: Cell,
    ) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        for cell in [start, goal] {
            if cell.row < 0
                || cell.col < 0
                || cell.row as usize >= rows
                || cell.col as usize >= cols
            {
                return Err(GridError::OutOfBounds { cell, rows, cols });
            }
        }
        let wall_prob = wall_prob.clamp(0.0, 1.0);

        for attempt in 1..=Self::MAX_ATTEMPTS {
            let grid = self.sample(rows, cols, wall_prob, start, goal)?;
            if has_valid_path(&grid, start, goal) {
                info!("maze generated after {attempt} attempt(s)");
                return Ok(grid);
            }
        }

        if rows == FALLBACK_ROWS && cols == FALLBACK_COLS {
            warn!("all {} attempts unsolvable, using the fixed maze", Self::MAX_ATTEMPTS);
            return Ok(fallback_maze());
        }

        warn!(
            "all {} attempts unsolvable, forcing an L-corridor maze",
            Self::MAX_ATTEMPTS
        );
        self.corridor(rows, cols, wall_prob, start, goal)
    }

    /// Sample one random grid with the endpoints forced free.
    fn sample(
        &mut self,
        rows: usize,
        cols: usize,
        wall_prob: f64,
        start: Cell,
        goal: Cell,
    ) -> Result<Grid, GridError> {
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            let state = if self.rng.random::<f64>() < wall_prob {
                CellState::Wall
            } else {
                CellState::Free
            };
            cells.push(state);
        }
        cells[start.row as usize * cols + start.col as usize] = CellState::Free;
        cells[goal.row as usize * cols + goal.col as usize] = CellState::Free;
        Grid::from_cells(rows, cols, cells)
    }

    /// Sample a grid, then force the first column and last row free so an
    /// explicit corridor runs from the top-left down and across to the
    /// bottom-right.
    fn corridor(
        &mut self,
        rows: usize,
        cols: usize,
        wall_prob: f64,
        start: Cell,
        goal: Cell,
    ) -> Result<Grid, GridError> {
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            let state = if self.rng.random::<f64>() < wall_prob {
                CellState::Wall
            } else {
                CellState::Free
            };
            cells.push(state);
        }
        cells[start.row as usize * cols + start.col as usize] = CellState::Free;
        cells[goal.row as usize * cols + goal.col as usize] = CellState::Free;
        for r in 0..rows {
            cells[r * cols] = CellState::Free;
        }
        for c in 0..cols {
            cells[(rows - 1) * cols + c] = CellState::Free;
        }
        Grid::from_cells(rows, cols, cells)
    }
}
