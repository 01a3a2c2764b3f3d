//! Static evaluator: material difference plus a mobility bonus, always from the
//! perspective of the side to move.
//!
//! Material values (pawn 1, knight 3, bishop 3, rook 5, queen 9) are scaled by 100 so the
//! mobility bonus (0.05 per legal move) still resolves to a non-zero integer contribution. A
//! position with no legal moves is scored as checkmate regardless of whose king is actually in
//! check — the caller (negamax, MCTS) is responsible for distinguishing mate from stalemate if
//! it needs to.

use crate::board::Board;
use crate::movegen::generate_legal_moves;
use crate::types::{Color, PieceType};

/// Material point values (pawn 1 .. queen 9), in centipawns.
const MATERIAL_VALUE: [i32; 6] = [100, 300, 300, 500, 900, 0];

/// Mobility bonus per legal move available to the side to move, in centipawns (0.05 pawns).
const MOBILITY_WEIGHT: i32 = 5;

/// Checkmate sentinel returned when the side to move has no legal moves.
pub const CHECKMATE: i32 = -10_000;

fn material_for(board: &Board, color: Color) -> i32 {
    PieceType::ALL.iter().map(|&pt| board.get_piece_bb(pt, color).popcount() as i32 * MATERIAL_VALUE[pt.index()]).sum()
}

/// White-minus-black material, from the side-to-move's perspective.
fn material_diff(board: &Board) -> i32 {
    let diff = material_for(board, Color::White) - material_for(board, Color::Black);
    match board.color_turn() {
        Color::White => diff,
        Color::Black => -diff,
    }
}

/// Material difference plus `0.05 * (legal moves for the side to move)`, or the checkmate
/// sentinel if the side to move has no legal moves.
pub fn evaluate(board: &Board) -> i32 {
    let legal_moves = generate_legal_moves(board).len() as i32;
    if legal_moves == 0 {
        return CHECKMATE;
    }
    material_diff(board) + MOBILITY_WEIGHT * legal_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn starting_position_is_materially_balanced() {
        let board = Board::starting_position();
        // Material is balanced; only the mobility term (20 legal moves) survives.
        assert_eq!(evaluate(&board), MOBILITY_WEIGHT * 20);
    }

    #[test]
    fn missing_queen_is_a_material_penalty_to_its_own_side() {
        let with_queen = Board::starting_position();
        let without_queen = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1").unwrap();
        assert!(evaluate(&without_queen) < evaluate(&with_queen));
    }

    #[test]
    fn stalemate_or_checkmate_position_scores_as_checkmate_sentinel() {
        // Classic king-in-the-corner stalemate: black to move, no legal moves, not in check.
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(generate_legal_moves(&board).len(), 0);
        assert_eq!(evaluate(&board), CHECKMATE);
    }
}
