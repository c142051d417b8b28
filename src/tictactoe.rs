//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;
pub mod minimax;

pub use board::{Action, Board, Cell, Player};
pub use lines::{WINNING_LINES, line_winner};
pub use minimax::minimax;
