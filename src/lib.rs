//! Exact reasoning engines for small grid games
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe game state model with move validation
//! - Exhaustive minimax search computing optimal play on the 3x3 board
//! - A propositional knowledge-base solver that deduces safe and mined
//!   cells of a Minesweeper grid from partial observations
//! - A ground-truth minefield for driving the solver in harnesses and tests
//!
//! Both engines are synchronous, deterministic (apart from explicitly
//! caller-supplied randomness), and free of I/O; the surrounding game loop,
//! rendering, and input handling belong to the caller.

pub mod error;
pub mod minesweeper;
pub mod tictactoe;

pub use error::{Error, Result};
pub use minesweeper::{Minefield, Sentence, Solver};
pub use tictactoe::{Action, Board, Player, minimax};
