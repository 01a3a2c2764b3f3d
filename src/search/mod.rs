//! Move-choosing strategies that sit on top of the board and move generator: a fixed-depth
//! negamax searcher, a time-bounded Monte Carlo tree search, and a random baseline.
//!
//! Every strategy here consumes only `Board` and the `movegen` module — none of them reach
//! into bitboards or FEN directly, the same boundary a GUI front end would cross through
//! `apply_move`/`generate_legal_moves`.

pub mod mcts;
pub mod negamax;

use rand::Rng;

use crate::board::Board;
use crate::movegen::generate_legal_moves;
use crate::moves::Move;

/// Plays a uniformly-random legal move: a cheap baseline opponent and a sanity check for
/// perft/MCTS harnesses. Returns `None` on a terminal board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let legal_moves = generate_legal_moves(board);
    if legal_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..legal_moves.len());
    Some(legal_moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_move_is_always_legal() {
        let board = Board::starting_position();
        let mut rng = SmallRng::seed_from_u64(42);
        let mv = random_move(&board, &mut rng).expect("starting position has legal moves");
        assert!(generate_legal_moves(&board).contains(&mv));
    }

    #[test]
    fn random_move_is_none_on_terminal_board() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(random_move(&board, &mut rng), None);
    }
}
