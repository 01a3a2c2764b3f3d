//! Command-line front end: perft verification, board dumps, and the two bots (`negamax`,
//! `mcts`) over a `Board` built from a FEN string or the starting position.
//!
//! This binary is a thin wrapper around the `chess_core` library — every subcommand here is
//! built from `apply_move`/`generate_legal_moves`/`from_fen`/`to_fen`, the same boundary a GUI
//! front end would cross.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use chess_core::board::{Board, START_FEN};
use chess_core::perft::perft_divide;
use chess_core::search::mcts::Mcts;
use chess_core::search::negamax;

#[derive(Parser)]
#[command(name = "chess_core", about = "Bitboard move generator and search core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints `<move> <child-node-count>` per legal root move, then a blank line and the total.
    Perft {
        depth: u32,
        #[arg(default_value = START_FEN)]
        fen: String,
    },
    /// Prints an 8-row text dump of the board (rank 8 on top, `.` for empty squares).
    Dump {
        #[arg(default_value = START_FEN)]
        fen: String,
    },
    /// Picks a move with fixed-depth alpha-beta negamax.
    Negamax {
        depth: u32,
        #[arg(default_value = START_FEN)]
        fen: String,
    },
    /// Picks a move with time-bounded Monte Carlo tree search.
    Mcts {
        /// Search budget in milliseconds.
        #[arg(long = "time-ms", default_value_t = 1000)]
        time_ms: u64,
        /// PRNG seed, for reproducible tie-breaking.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(default_value = START_FEN)]
        fen: String,
    },
}

fn parse_board(fen: &str) -> Result<Board, ExitCode> {
    Board::from_fen(fen).map_err(|err| {
        eprintln!("{err}");
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Perft { depth, fen } => {
            let board = match parse_board(&fen) {
                Ok(b) => b,
                Err(code) => return code,
            };
            log::debug!("perft depth={depth} fen={fen}");
            let (breakdown, total) = perft_divide(&board, depth);
            for (m, count) in breakdown {
                println!("{m} {count}");
            }
            println!();
            println!("{total}");
            ExitCode::SUCCESS
        }
        Command::Dump { fen } => {
            let board = match parse_board(&fen) {
                Ok(b) => b,
                Err(code) => return code,
            };
            print!("{board}");
            ExitCode::SUCCESS
        }
        Command::Negamax { depth, fen } => {
            let board = match parse_board(&fen) {
                Ok(b) => b,
                Err(code) => return code,
            };
            log::debug!("negamax depth={depth} fen={fen}");
            match negamax::best_move(&board, depth) {
                Some(m) => {
                    println!("{m}");
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no legal moves");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Mcts { time_ms, seed, fen } => {
            let board = match parse_board(&fen) {
                Ok(b) => b,
                Err(code) => return code,
            };
            let mut mcts = Mcts::new(board, seed);
            mcts.search(Duration::from_millis(time_ms));
            let (rollouts, elapsed) = mcts.statistics();
            log::debug!("mcts rollouts={rollouts} elapsed={elapsed:.3}s");
            match mcts.choose_best_move() {
                Some(m) => {
                    println!("{m}");
                    eprintln!("statistics: {rollouts} rollouts in {elapsed:.3}s");
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no legal moves");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
