//! Configuration types for building a session.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, minimax::Scoring};

/// Who plays against whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the terminal
    TwoPlayer,
    /// A human plays the minimax computer
    Computer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "2player"),
            GameMode::Computer => write!(f, "computer"),
        }
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2player" => Ok(GameMode::TwoPlayer),
            "computer" => Ok(GameMode::Computer),
            _ => Err(Error::ParseGameMode {
                input: s.to_string(),
            }),
        }
    }
}

/// Who takes X (and therefore the first move) against the computer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstMove {
    #[default]
    Human,
    Computer,
    /// Decided by a coin flip, seeded by [`SessionConfig::seed`] when set
    Random,
}

impl fmt::Display for FirstMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstMove::Human => write!(f, "human"),
            FirstMove::Computer => write!(f, "computer"),
            FirstMove::Random => write!(f, "random"),
        }
    }
}

impl FromStr for FirstMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(FirstMove::Human),
            "computer" => Ok(FirstMove::Computer),
            "random" => Ok(FirstMove::Random),
            _ => Err(Error::ParseFirstMove {
                input: s.to_string(),
            }),
        }
    }
}

/// Configuration for one game.
///
/// # Examples
///
/// ```
/// use noughts::app::{FirstMove, GameMode, SessionConfig};
/// use noughts::minimax::Scoring;
///
/// let config = SessionConfig::new(GameMode::Computer)
///     .with_first(FirstMove::Random)
///     .with_seed(7)
///     .with_scoring(Scoring::DepthAdjusted);
/// assert_eq!(config.names[0], "Player 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: GameMode,
    /// Only consulted in [`GameMode::Computer`]
    pub first: FirstMove,
    /// Terminal scoring used by the computer
    pub scoring: Scoring,
    /// Random seed for the first-move coin flip
    pub seed: Option<u64>,
    /// Human display names; the second is unused against the computer
    pub names: [String; 2],
}

impl SessionConfig {
    /// Create a configuration with the given mode.
    ///
    /// Defaults: the human moves first, flat scoring, no seed, names
    /// "Player 1" and "Player 2".
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            first: FirstMove::default(),
            scoring: Scoring::default(),
            seed: None,
            names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }

    pub fn with_first(mut self, first: FirstMove) -> Self {
        self.first = first;
        self
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameMode::Computer)
    }
}
