//! Frontier disciplines for the uninformed strategies.

use std::collections::VecDeque;

use gridsearch_core::Cell;

/// Ordering policy of an uninformed frontier.
///
/// Both disciplines snapshot their contents in storage order: for the
/// queue that is next-popped-first, for the stack it is bottom-to-top.
pub(crate) trait Frontier {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
    fn iter(&self) -> impl Iterator<Item = Cell>;
}

/// First-in-first-out frontier (breadth-first).
#[derive(Debug, Default)]
pub(crate) struct Fifo(VecDeque<Cell>);

impl Frontier for Fifo {
    fn push(&mut self, cell: Cell) {
        self.0.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop_front()
    }

    fn iter(&self) -> impl Iterator<Item = Cell> {
        self.0.iter().copied()
    }
}

/// Last-in-first-out frontier (depth-first).
#[derive(Debug, Default)]
pub(crate) struct Lifo(Vec<Cell>);

impl Frontier for Lifo {
    fn push(&mut self, cell: Cell) {
        self.0.push(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop()
    }

    fn iter(&self) -> impl Iterator<Item = Cell> {
        self.0.iter().copied()
    }
}
