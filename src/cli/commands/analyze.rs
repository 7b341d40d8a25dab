//! Analyze command - minimax evaluation of a single position

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_positions, print_kv, print_section},
    minimax::{Minimax, Scoring},
    tictactoe::{BoardState, Cell, LineAnalyzer, Outcome, Player, format_board},
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a position with minimax")]
pub struct AnalyzeArgs {
    /// Board as nine cells in row-major order, e.g. "XO..X...." ('.' is empty)
    pub board: String,

    /// Side the computer plays (x or o); defaults to the side to move
    #[arg(long, short = 'c')]
    pub computer: Option<Player>,

    /// Terminal scoring (flat or depth-adjusted)
    #[arg(long, default_value = "flat")]
    pub scoring: Scoring,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Score of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// Everything `analyze` reports about a position
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub outcome: Outcome,
    pub computer: Player,
    pub scoring: Scoring,
    pub moves: Vec<MoveScore>,
    pub best_move: Option<usize>,
    pub immediate_wins_x: Vec<usize>,
    pub immediate_wins_o: Vec<usize>,
    pub nodes_visited: u64,
}

impl AnalysisReport {
    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Side to move when X opened: X on equal counts, O otherwise
pub fn side_to_move(board: &BoardState) -> Player {
    let x = board.cells().iter().filter(|&&c| c == Cell::X).count();
    let o = board.cells().iter().filter(|&&c| c == Cell::O).count();
    if x > o { Player::O } else { Player::X }
}

/// Evaluate `board` for `computer`.
///
/// Terminal boards produce a report with no moves and no best move.
pub fn analyze_board(
    board: &BoardState,
    computer: Player,
    scoring: Scoring,
) -> crate::Result<AnalysisReport> {
    let outcome = board.evaluate_outcome();
    let mut search = Minimax::new(computer).with_scoring(scoring);

    let (moves, best_move) = if outcome.is_terminal() {
        (Vec::new(), None)
    } else {
        let moves: Vec<MoveScore> = search
            .evaluate_moves(board)?
            .into_iter()
            .map(|(position, score)| MoveScore { position, score })
            .collect();
        // First maximum, the same tie-break `Minimax::best_move` uses.
        let best = moves
            .iter()
            .fold(None::<MoveScore>, |best, m| match best {
                Some(b) if b.score >= m.score => Some(b),
                _ => Some(*m),
            })
            .map(|m| m.position);
        (moves, best)
    };

    Ok(AnalysisReport {
        board: board.encode(),
        outcome,
        computer,
        scoring,
        moves,
        best_move,
        immediate_wins_x: LineAnalyzer::winning_moves(board.cells(), Player::X),
        immediate_wins_o: LineAnalyzer::winning_moves(board.cells(), Player::O),
        nodes_visited: search.nodes_visited(),
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)
        .with_context(|| format!("cannot parse board '{}'", args.board))?;
    let computer = args.computer.unwrap_or_else(|| side_to_move(&board));
    let report = analyze_board(&board, computer, args.scoring)?;

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", format_board(&board));

    print_section("Analysis");
    let outcome = match report.outcome {
        Outcome::Win(player) => format!("{player} has won"),
        Outcome::Draw => "draw".to_string(),
        Outcome::Ongoing => "ongoing".to_string(),
    };
    print_kv("Outcome", &outcome);
    print_kv("Computer plays", &report.computer.to_string());
    print_kv("Scoring", &report.scoring.to_string());
    print_kv("Immediate wins (X)", &format_positions(&report.immediate_wins_x));
    print_kv("Immediate wins (O)", &format_positions(&report.immediate_wins_o));

    if let Some(best) = report.best_move {
        println!();
        for MoveScore { position, score } in &report.moves {
            let marker = if *position == best { "  <- best" } else { "" };
            println!("  move {position}: {score:>4}{marker}");
        }
        println!();
        print_kv("Best move", &best.to_string());
        print_kv("Nodes visited", &report.nodes_visited.to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

    #[test]
    fn side_to_move_follows_piece_counts() {
        assert_eq!(side_to_move(&BoardState::new()), Player::X);
        let board = BoardState::from_string("X........").unwrap();
        assert_eq!(side_to_move(&board), Player::O);
    }

    #[test]
    fn report_scores_every_empty_cell() {
        // X X .
        // O O .
        // . . .
        let board = BoardState::from_string("XX. OO. ...").unwrap();
        let report = analyze_board(&board, Player::X, Scoring::Flat).unwrap();
        let scores: Vec<(usize, i32)> = report
            .moves
            .iter()
            .map(|m| (m.position, m.score))
            .collect();
        // 6 blocks O's row and holds the draw; the rest let O complete it.
        assert_eq!(
            scores,
            vec![
                (3, WIN_SCORE),
                (6, DRAW_SCORE),
                (7, LOSS_SCORE),
                (8, LOSS_SCORE),
                (9, LOSS_SCORE)
            ]
        );
        assert_eq!(report.best_move, Some(3));
        assert_eq!(report.immediate_wins_x, vec![3]);
        assert_eq!(report.immediate_wins_o, vec![6]);
    }

    #[test]
    fn empty_board_is_a_draw_everywhere() {
        let report = analyze_board(&BoardState::new(), Player::X, Scoring::Flat).unwrap();
        assert!(report.moves.iter().all(|m| m.score == DRAW_SCORE));
        assert_eq!(report.best_move, Some(1));
    }

    #[test]
    fn terminal_board_has_no_moves() {
        let board = BoardState::from_string("XXX OO. ...").unwrap();
        let report = analyze_board(&board, Player::O, Scoring::Flat).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert!(report.moves.is_empty());
        assert_eq!(report.best_move, None);
    }

    #[test]
    fn json_report_names_the_best_move() {
        let board = BoardState::from_string("XX. .O. ...").unwrap();
        let report = analyze_board(&board, Player::O, Scoring::Flat).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["best_move"], 3);
        assert_eq!(json["computer"], "O");
        assert_eq!(json["outcome"], "Ongoing");
    }

    #[test]
    fn analyze_args_accept_player_tokens() {
        let args =
            AnalyzeArgs::try_parse_from(["analyze", "X...O....", "-c", "x", "--json"]).unwrap();
        assert_eq!(args.computer, Some(Player::X));
        assert!(args.json);
        assert_eq!(args.scoring, Scoring::Flat);
    }
}
