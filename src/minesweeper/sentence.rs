//! Logical sentences about the board
//!
//! A [`Sentence`] states that exactly `count` of a set of cells are mines.
//! Sentences expose only two resolution rules (all-mines, all-safe) and two
//! mutation rules (resolve one cell as mine or safe); every richer
//! inference lives in the [solver](super::solver).

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the minefield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// The up-to-8 surrounding coordinates, clipped to an `height` x `width`
    /// grid.
    pub fn neighbors(self, height: usize, width: usize) -> HashSet<Cell> {
        let mut neighbors = HashSet::new();
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = self.row as i64 + dr;
                let col = self.col as i64 + dc;
                if (0..height as i64).contains(&row) && (0..width as i64).contains(&col) {
                    neighbors.insert(Cell::new(row as usize, col as usize));
                }
            }
        }
        neighbors
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// "Exactly `count` of `cells` are mines."
///
/// Equality is structural: two sentences are equal iff their cell sets and
/// counts are equal, independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    cells: HashSet<Cell>,
    count: usize,
}

impl Sentence {
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        Sentence {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// A sentence whose cell set has emptied carries no information and
    /// should be discarded by its owner.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells certain to be mines from this sentence alone.
    ///
    /// That is all of them when the count equals the set size, and none
    /// otherwise.
    pub fn known_mines(&self) -> HashSet<Cell> {
        if self.cells.len() == self.count {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Cells certain to be safe from this sentence alone (all of them when
    /// the count is zero, none otherwise).
    pub fn known_safes(&self) -> HashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Resolve `cell` as a mine: remove it and decrement the count, so the
    /// sentence keeps meaning "exactly `count` mines among the remaining
    /// cells". No-op when `cell` is not a member. The decrement saturates
    /// at zero so inconsistent input can never violate the count bound.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count = self.count.saturating_sub(1);
        }
    }

    /// Resolve `cell` as safe: remove it, count unchanged. No-op when
    /// `cell` is not a member.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<Cell> = self.cells.iter().copied().collect();
        sorted.sort_unstable();
        write!(f, "{{")?;
        for (i, cell) in sorted.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}
