//! Wiring of contestants into a session.

use std::io::{BufRead, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use super::config::{FirstMove, GameMode, SessionConfig};
use crate::{
    adapters::{HumanContestant, MinimaxContestant, SharedInput},
    ports::Contestant,
    session::Session,
    tictactoe::Player,
};

/// Name the computer plays under
pub const COMPUTER_NAME: &str = "Computer";

/// Application entry point: resolves a configuration into a playable session.
///
/// # Examples
///
/// ```
/// use std::io::{Cursor, sink};
///
/// use noughts::{
///     adapters::shared_input,
///     app::{App, FirstMove, GameMode, SessionConfig},
///     ports::NullObserver,
///     tictactoe::{Outcome, Player},
/// };
///
/// let app = App::new(SessionConfig::new(GameMode::TwoPlayer));
/// let input = shared_input(Cursor::new("1\n4\n2\n5\n3\n"));
/// let mut session = app.build_session(input, sink);
/// assert_eq!(session.run(&mut NullObserver)?, Outcome::Win(Player::X));
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct App {
    config: SessionConfig,
    human_mark: Player,
}

impl App {
    /// Create an app, flipping the first-move coin now if asked to.
    pub fn new(config: SessionConfig) -> Self {
        let human_mark = match config.first {
            FirstMove::Human => Player::X,
            FirstMove::Computer => Player::O,
            FirstMove::Random => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::seed_from_u64(rand::random::<u64>()),
                };
                if rng.random_bool(0.5) {
                    Player::X
                } else {
                    Player::O
                }
            }
        };
        Self { config, human_mark }
    }

    /// Mark the (first) human plays against the computer
    pub fn human_mark(&self) -> Player {
        self.human_mark
    }

    /// Build a session reading moves from `input`.
    ///
    /// `output` is called once per human contestant for the writer their
    /// prompts go to.
    pub fn build_session<'a, R, W>(
        &self,
        input: SharedInput<R>,
        output: impl Fn() -> W,
    ) -> Session<'a>
    where
        R: BufRead + 'a,
        W: Write + 'a,
    {
        let [first_name, second_name] = self.config.names.clone();
        match self.config.mode {
            GameMode::TwoPlayer => {
                info!(x = %first_name, o = %second_name, "two-player session");
                let x = HumanContestant::new(first_name, input.clone(), output());
                let o = HumanContestant::new(second_name, input, output());
                Session::new(Box::new(x), Box::new(o))
            }
            GameMode::Computer => {
                info!(
                    human = %first_name,
                    mark = %self.human_mark,
                    scoring = %self.config.scoring,
                    "computer session"
                );
                let human: Box<dyn Contestant + 'a> =
                    Box::new(HumanContestant::new(first_name, input, output()));
                let computer: Box<dyn Contestant + 'a> = Box::new(
                    MinimaxContestant::new(COMPUTER_NAME).with_scoring(self.config.scoring),
                );
                match self.human_mark {
                    Player::X => Session::new(human, computer),
                    Player::O => Session::new(computer, human),
                }
            }
        }
    }
}
