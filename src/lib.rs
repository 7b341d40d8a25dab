//! Tic-tac-toe with a human-vs-human mode and a minimax computer opponent.
//!
//! This crate provides:
//! - The 3x3 board model with move validation and outcome detection
//! - An exhaustive minimax search that picks the computer's move
//! - Ports and adapters for move sources (humans, computer) and renderers
//! - A session driver running the turn loop, and the `noughts` CLI

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod minimax;
pub mod ports;
pub mod session;
pub mod tictactoe;

pub use error::{Error, MoveRejection, Result};
pub use minimax::{Minimax, Scoring};
pub use session::Session;
