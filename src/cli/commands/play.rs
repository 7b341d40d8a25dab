//! Play command - an interactive game in the terminal

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    Error,
    adapters::{ConsoleObserver, shared_input},
    app::{App, FirstMove, GameMode, SessionConfig, select_mode},
    minimax::Scoring,
    tictactoe::{Game, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    /// Game mode (2player or computer); asked interactively when omitted
    #[arg(long, short = 'm')]
    pub mode: Option<GameMode>,

    /// Who plays X and moves first against the computer (human, computer, random)
    #[arg(long, default_value = "human")]
    pub first: FirstMove,

    /// Terminal scoring for the computer (flat or depth-adjusted)
    #[arg(long, default_value = "flat")]
    pub scoring: Scoring,

    /// Random seed for the first-move coin flip
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game to this file as JSON
    #[arg(long)]
    pub record: Option<PathBuf>,
}

/// A finished game as written by `--record`
#[derive(Debug, Serialize)]
pub struct GameRecord<'a> {
    pub mode: GameMode,
    pub x: &'a str,
    pub o: &'a str,
    pub moves: &'a [Move],
    pub board: String,
    pub outcome: Outcome,
}

impl<'a> GameRecord<'a> {
    pub fn new(mode: GameMode, names: [&'a str; 2], game: &'a Game) -> Self {
        Self {
            mode,
            x: names[0],
            o: names[1],
            moves: game.moves(),
            board: game.board().encode(),
            outcome: game.outcome(),
        }
    }
}

impl GameRecord<'_> {
    /// Pretty-printed JSON form of the record
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let input = shared_input(io::stdin().lock());
    let mut stdout = io::stdout();

    println!("Welcome to TicTacToe");
    let mode = match args.mode {
        Some(mode) => mode,
        None => select_mode(&*input, &mut stdout)?,
    };

    let mut config = SessionConfig::new(mode)
        .with_first(args.first)
        .with_scoring(args.scoring);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let app = App::new(config);

    match mode {
        GameMode::TwoPlayer => {
            println!("Selected 2 player: Begin game");
            println!("Player 1 is X's");
            println!("Player 2 is O's");
        }
        GameMode::Computer => {
            println!("Selected computer: Begin game");
            println!("You are {}'s", app.human_mark());
        }
    }

    let mut session = app.build_session(input, io::stdout);
    let mut observer = ConsoleObserver::new(io::stdout());
    match session.run(&mut observer) {
        Ok(_) => {}
        Err(Error::InputClosed) => {
            println!();
            println!("Input closed, game abandoned.");
            return Ok(());
        }
        Err(err) => return Err(err).context("game aborted"),
    }

    if let Some(path) = args.record {
        let names = [session.name_of(Player::X), session.name_of(Player::O)];
        let record = GameRecord::new(mode, names, session.game());
        let json = record.to_json().context("failed to encode game record")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write game record to {}", path.display()))?;
        println!("Game record written to: {}", path.display());
    }

    Ok(())
}
