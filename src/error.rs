//! Error kinds surfaced to callers.
//!
//! `InvalidPieceType` is not represented here: it is an internal invariant violation (a
//! `PieceType` discriminant the engine itself produced is out of range) and aborts via
//! `debug_assert!`/`panic!` rather than unwinding through a `Result`. `IllegalMove` is never
//! raised by the engine internally — only `Board::apply_move_checked`, the entry point external
//! callers use, can produce it.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}
