//! Ground-truth minefield
//!
//! The [`Minefield`] is what the external game loop owns: it knows where
//! the mines really are, answers neighbor-mine counts for revealed cells,
//! and tracks flags. The [solver](super::solver) never sees it directly.

use std::{collections::HashSet, fmt};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sentence::Cell;

/// An `height` x `width` board with a fixed set of mines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Minefield {
    height: usize,
    width: usize,
    mines: HashSet<Cell>,
    flagged: HashSet<Cell>,
}

impl Minefield {
    /// Place `mine_count` mines uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if more mines are
    /// requested than the grid has cells.
    pub fn generate(
        height: usize,
        width: usize,
        mine_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, crate::Error> {
        if mine_count > height * width {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "cannot place {mine_count} mines on a {height}x{width} board"
                ),
            });
        }

        let mut mines = HashSet::new();
        while mines.len() < mine_count {
            mines.insert(Cell::new(
                rng.random_range(0..height),
                rng.random_range(0..width),
            ));
        }

        Ok(Minefield {
            height,
            width,
            mines,
            flagged: HashSet::new(),
        })
    }

    /// Build a field with an explicit mine layout (for tests and replays).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if any mine lies
    /// outside the grid.
    pub fn with_mines(
        height: usize,
        width: usize,
        mines: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, crate::Error> {
        let mines: HashSet<Cell> = mines.into_iter().collect();
        if let Some(outside) = mines
            .iter()
            .find(|cell| cell.row >= height || cell.col >= width)
        {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("mine {outside} lies outside the {height}x{width} board"),
            });
        }

        Ok(Minefield {
            height,
            width,
            mines,
            flagged: HashSet::new(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Number of mines within one row and column of `cell`, the cell
    /// itself excluded.
    pub fn nearby_mines(&self, cell: Cell) -> usize {
        cell.neighbors(self.height, self.width)
            .intersection(&self.mines)
            .count()
    }

    /// Flag a suspected mine
    pub fn flag(&mut self, cell: Cell) {
        self.flagged.insert(cell);
    }

    /// True when every mine (and nothing else) has been flagged
    pub fn all_mines_found(&self) -> bool {
        self.flagged == self.mines
    }
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = if self.is_mine(Cell::new(row, col)) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            if row < self.height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
