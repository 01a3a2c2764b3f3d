//! Fixed-depth negamax search with alpha-beta pruning: at each node, negate the child's score
//! and widen alpha; cut off once `beta <= alpha`.

use crate::board::Board;
use crate::eval::evaluate;
use crate::movegen::generate_legal_moves;
use crate::moves::Move;

/// Negates and recurses one ply, stopping at `depth == 0` to return the static evaluation.
fn negamax(board: &Board, depth: u32, mut alpha: i32, beta: i32) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let legal_moves = generate_legal_moves(board);
    if legal_moves.is_empty() {
        return evaluate(board);
    }

    for m in legal_moves {
        let child = board.apply_move(m);
        let score = -negamax(&child, depth - 1, -beta, -alpha);
        alpha = alpha.max(score);
        if beta <= alpha {
            break;
        }
    }
    alpha
}

/// Enumerates legal moves at the root, scores each by `-negamax(child, depth - 1, -inf, +inf)`,
/// and returns the move with the highest score. Returns `None` on a terminal board.
pub fn best_move(board: &Board, depth: u32) -> Option<Move> {
    let legal_moves = generate_legal_moves(board);
    legal_moves
        .into_iter()
        .map(|m| {
            let child = board.apply_move(m);
            let score = -negamax(&child, depth.saturating_sub(1), i32::MIN + 1, i32::MAX - 1);
            (m, score)
        })
        .max_by_key(|&(_, score)| score)
        .map(|(m, _)| m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn best_move_is_none_on_terminal_board() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(best_move(&board, 3), None);
    }

    #[test]
    fn finds_mate_in_one() {
        // Ladder mate: Rb7 cuts off rank 7, Ra1-a8 delivers back-rank mate.
        let board = Board::from_fen("4k3/1R6/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let chosen = best_move(&board, 2).expect("at least one legal move");
        let after = board.apply_move(chosen);
        assert_eq!(generate_legal_moves(&after).len(), 0);
        assert!(after.is_square_attacked(after.king_square(crate::types::Color::Black), crate::types::Color::White));
    }

    #[test]
    fn prefers_capturing_a_free_queen() {
        let board = Board::from_fen("4k3/8/8/8/8/8/q7/R3K3 w - - 0 1").unwrap();
        let chosen = best_move(&board, 2).unwrap();
        let a1 = Square::from_algebraic("a1").unwrap();
        let a2 = Square::from_algebraic("a2").unwrap();
        assert_eq!(chosen, crate::moves::Move::quiet(a1, a2));
    }
}
