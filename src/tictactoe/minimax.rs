//! Exhaustive minimax search
//!
//! Plain mutual recursion with no pruning, memoization, or depth limit.
//! The 3x3 game tree has at most 9! = 362,880 leaf paths, so exhaustive
//! search is trivially tractable and keeps the contract exact.

use super::board::{Action, Board, Player};

/// The optimal action for the side to move, or `None` on a terminal board.
///
/// X maximizes the eventual [`Board::utility`], O minimizes it. Among
/// equally good actions the first in the row-major order of
/// [`Board::actions`] is kept; callers should treat the tie-break as
/// arbitrary.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let maximizing = board.player() == Player::X;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_action = None;

    for action in board.actions() {
        let next = board
            .make_move(action)
            .expect("legal move generation should not fail");
        let value = if maximizing {
            min_value(&next)
        } else {
            max_value(&next)
        };

        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_action = Some(action);
        }
    }

    best_action
}

/// Value of `board` assuming X picks the best continuation.
fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MIN;
    for action in board.actions() {
        let next = board
            .make_move(action)
            .expect("legal move generation should not fail");
        value = value.max(min_value(&next));
    }
    value
}

/// Value of `board` assuming O picks the best continuation.
fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MAX;
    for action in board.actions() {
        let next = board
            .make_move(action)
            .expect("legal move generation should not fail");
        value = value.min(max_value(&next));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(minimax(&board), None);

        let full = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(minimax(&full), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X . <- (0, 2) wins outright; any other move lets O win at (1, 2)
        // O O .
        // . . .
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(board.player(), Player::X);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_minimizer_takes_immediate_win() {
        // O O . <- (0, 2) wins outright for O
        // X X O
        // X . X
        let board = Board::from_string("OO.XXOX.X").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X . <- O must block at (0, 2); everything else loses
        // . O .
        // . . .
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }
}
