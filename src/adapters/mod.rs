//! Adapters implementing the ports.
//!
//! - [`HumanContestant`]: reads positions from a line-based input
//! - [`MinimaxContestant`]: plays the exhaustive minimax move
//! - [`RandomContestant`]: plays a uniformly random legal move
//! - [`ConsoleObserver`]: renders the game as text

pub mod computer;
pub mod console;
pub mod human;

pub use computer::{MinimaxContestant, RandomContestant};
pub use console::ConsoleObserver;
pub use human::{HumanContestant, SharedInput, prompt_line, shared_input};
