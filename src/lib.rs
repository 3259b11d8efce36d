//! MENACE-style matchbox learner for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe board with symmetry-aware state deduplication
//! - A matchbox state table learned through weighted self-play
//! - Credit assignment following the original matchbox machine's rules
//! - An interactive human-vs-machine play loop
//! - A breadth-first minimum knight-move search utility

pub mod board;
pub mod credit;
pub mod error;
pub mod knight;
pub mod play;
pub mod selfplay;
pub mod symmetry;
pub mod table;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use selfplay::{DEFAULT_ITERATIONS, GameRecord, Trainer, TrainerConfig, Trajectory};
pub use symmetry::Symmetry;
pub use table::{INITIAL_WEIGHT, StateEntry, StateTable};
