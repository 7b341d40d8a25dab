//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The session driver only talks to these traits. Move sources (a human at
//! a terminal, the minimax search) and event sinks (the console renderer,
//! test recorders) are adapters in [`crate::adapters`].

pub mod contestant;
pub mod observer;

pub use contestant::Contestant;
pub use observer::{NullObserver, Observer};
