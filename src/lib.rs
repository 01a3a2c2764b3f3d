//! Bitboard move generator and search core for a chess engine.
//!
//! # Architecture
//! - `types`: color and piece-type tags.
//! - `square`: 0..63 square indexing and algebraic notation.
//! - `bitboard`: the 64-bit set type and its bitwise operators.
//! - `tables`: precomputed rank/file/diagonal masks and leaper/pawn attack tables.
//! - `sliding`: rank/file/diagonal/anti-diagonal attacks via the first-rank-fill trick.
//! - `moves`: the immutable `Move` record.
//! - `board`: the bitboard-backed `Board` snapshot, `apply_move`, FEN I/O, attack queries.
//! - `movegen`: pseudo-legal and legal move enumeration.
//! - `perft`: the recursive node-count correctness oracle.
//! - `eval`: material-plus-mobility static evaluation.
//! - `search`: negamax, Monte Carlo tree search, and a random baseline.
//! - `error`: the error kinds surfaced to callers.
//!
//! External callers (a GUI, a perft harness, a bot driver) only need `Board`, `Move`, and a
//! handful of entry points: `apply_move`, `generate_legal_moves`, `piece_on`, `from_fen`,
//! `to_fen`, `color_turn`, and whichever search in `search` picks a move.

pub mod bitboard;
pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod search;
pub mod sliding;
pub mod square;
pub mod tables;
pub mod types;

pub use board::Board;
pub use error::ChessError;
pub use moves::Move;
pub use types::{Color, PieceType};
