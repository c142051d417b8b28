//! Winning line analysis

use super::board::{Cell, Player, SIZE};

/// Winning line indices on the 3x3 board, in the order they are checked:
/// rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Owner of the first completed line, if any.
///
/// On boards reached by legal play at most one side can hold a completed
/// line, so the check order only fixes which of several lines of the same
/// owner is reported.
pub fn line_winner(cells: &[Cell; SIZE * SIZE]) -> Option<Player> {
    WINNING_LINES.iter().find_map(|line| {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            first.to_player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_on_empty_board() {
        let cells = [Cell::Empty; 9];
        assert_eq!(line_winner(&cells), None);
    }

    #[test]
    fn test_row_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;
        assert_eq!(line_winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_column_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;
        assert_eq!(line_winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_diagonal_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;
        assert_eq!(line_winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        assert_eq!(line_winner(&cells), None);
    }
}
