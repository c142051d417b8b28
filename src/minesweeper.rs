//! Minesweeper knowledge-base solver

pub mod field;
pub mod sentence;
pub mod solver;

pub use field::Minefield;
pub use sentence::{Cell, Sentence};
pub use solver::Solver;
