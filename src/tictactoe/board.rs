//! Board state representation and basic operations
//!
//! A [`Board`] is an immutable snapshot of the nine cells. Unlike engines
//! that carry a separate turn marker, the side to move is always derived
//! from the mark counts: X moves first, so X is to move exactly when both
//! sides have placed the same number of marks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board side length; the grid is `SIZE` x `SIZE`.
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A (row, column) move coordinate.
///
/// Coordinates are unsigned, so negative values are unrepresentable; the
/// upper bound is validated by [`Board::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable board snapshot.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
/// The side to move is not stored; see [`Board::player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters in row-major order.
    /// Newlines are ignored; both `'.'` and `' '` read as empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters are present or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '\n').collect();
        if chars.len() < SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; SIZE * SIZE];
        for (i, &c) in chars.iter().take(SIZE * SIZE).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    fn index(action: Action) -> usize {
        action.row * SIZE + action.col
    }

    /// Get cell at a coordinate
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * SIZE + col]
    }

    /// Raw cell array in row-major order
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// The side to move, derived purely from mark counts.
    ///
    /// X moves first, so X is to move whenever the counts are equal and O
    /// whenever X is ahead by one. Boards that could not arise from
    /// alternating play still get a deterministic answer: any board where X
    /// leads the count yields O.
    pub fn player(&self) -> Player {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count > o_count { Player::O } else { Player::X }
    }

    /// All legal actions: every empty coordinate, in row-major order.
    ///
    /// Empty on a full board.
    pub fn actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::new(i / SIZE, i % SIZE))
            .collect()
    }

    /// Apply an action for the side to move and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `action` lies outside the
    /// grid and [`crate::Error::CellOccupied`] if the target cell is not
    /// empty.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, action: Action) -> Result<Board, crate::Error> {
        if action.row >= SIZE || action.col >= SIZE {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
            });
        }

        if self.get(action.row, action.col) != Cell::Empty {
            return Err(crate::Error::CellOccupied {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[Self::index(action)] = self.player().to_cell();
        Ok(next)
    }

    /// The winner, if any line is complete.
    ///
    /// Lines are checked rows first, then columns, then diagonals; at most
    /// one side can hold a completed line on a board reached by legal play.
    pub fn winner(&self) -> Option<Player> {
        super::lines::line_winner(&self.cells)
    }

    /// Check if the game is over (completed line or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Game-theoretic value: +1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// Non-terminal boards also return 0; only call this on terminal boards
    /// for a meaningful result.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < SIZE * SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
