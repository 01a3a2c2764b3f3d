//! Sliding-piece attack derivation via the first-rank-fill trick.
//!
//! Each primitive projects the relevant rank/file/diagonal/anti-diagonal occupancy onto an 8-bit
//! byte on rank 1, looks up `TABLES.first_rank_moves`, then expands the result back onto the
//! original line. Returns squares the slider can reach including the first blocker on each side
//! (friend or foe) — callers subtract friendly pieces themselves.

use crate::bitboard::Bitboard;
use crate::square::Square;
use crate::tables::TABLES;

/// Rank attacks: isolate occupancy on the square's rank, project to rank 1 via the A-file
/// multiplier, look up, expand back.
pub fn rank_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    let file = sq.file();
    let rank_mask = TABLES.ranks[sq.rank() as usize];
    let masked = rank_mask.0 & occupancy.0;
    let projected = masked.wrapping_mul(TABLES.files[0].0) >> 56;
    let moves_byte = TABLES.first_rank_moves[file as usize][projected as usize];
    let expanded = (moves_byte as u64).wrapping_mul(TABLES.files[0].0);
    Bitboard(expanded) & rank_mask
}

/// File attacks: rotate the file onto the A-file, project via the main-diagonal multiplier,
/// look up with the square's "first rank" index, expand via the diagonal, isolate the H-file and
/// shift back.
pub fn file_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    let file = sq.file();
    let i = sq.index() as u32;

    let rotated = TABLES.files[0].0 & (occupancy.0 >> file);
    let projected = (diag_a1h8().wrapping_mul(rotated)) >> 56;

    let first_rank_index = (i ^ 56) >> 3;
    let moves_byte = TABLES.first_rank_moves[first_rank_index as usize][projected as usize];

    let expanded = diag_a1h8().wrapping_mul(moves_byte as u64);
    let h_file = TABLES.files[7].0 & expanded;
    Bitboard(h_file >> (file as u32 ^ 7))
}

/// Diagonal attacks: same projection as file attacks, using the square's diagonal mask.
pub fn diag_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    let mask = TABLES.diag_masks[sq.index()];
    let occ = mask.0 & occupancy.0;
    let projected = (TABLES.files[0].0.wrapping_mul(occ)) >> 56;
    let moves_byte = TABLES.first_rank_moves[sq.file() as usize][projected as usize];
    let expanded = TABLES.files[0].0.wrapping_mul(moves_byte as u64);
    Bitboard(expanded) & mask
}

/// Anti-diagonal attacks: same projection as diagonal attacks, using the anti-diagonal mask.
pub fn antidiag_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    let mask = TABLES.antidiag_masks[sq.index()];
    let occ = mask.0 & occupancy.0;
    let projected = (TABLES.files[0].0.wrapping_mul(occ)) >> 56;
    let moves_byte = TABLES.first_rank_moves[sq.file() as usize][projected as usize];
    let expanded = TABLES.files[0].0.wrapping_mul(moves_byte as u64);
    Bitboard(expanded) & mask
}

pub fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    diag_attacks(sq, occupancy) ^ antidiag_attacks(sq, occupancy)
}

pub fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    rank_attacks(sq, occupancy) ^ file_attacks(sq, occupancy)
}

pub fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

#[inline(always)]
const fn diag_a1h8() -> u64 {
    0x8040_2010_0804_0201
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_empty_board_reaches_full_rank_and_file() {
        let d4 = Square::from_algebraic("d4").unwrap();
        let attacks = rook_attacks(d4, Bitboard::EMPTY);
        // Full rank (7 other squares) + full file (7 other squares) = 14.
        assert_eq!(attacks.popcount(), 14);
    }

    #[test]
    fn bishop_on_empty_board_from_center() {
        let d4 = Square::from_algebraic("d4").unwrap();
        let attacks = bishop_attacks(d4, Bitboard::EMPTY);
        assert_eq!(attacks.popcount(), 13);
    }

    #[test]
    fn rook_stops_at_first_blocker_each_direction() {
        let a1 = Square::from_algebraic("a1").unwrap();
        let blockers = Square::from_algebraic("a4").unwrap().to_bitboard() | Square::from_algebraic("d1").unwrap().to_bitboard();
        let attacks = rook_attacks(a1, blockers);
        // North: a2,a3,a4 (blocker included), East: b1,c1,d1 (blocker included).
        for s in ["a2", "a3", "a4", "b1", "c1", "d1"] {
            assert!(attacks.0 & Square::from_algebraic(s).unwrap().to_bitboard().0 != 0, "{s} should be reachable");
        }
        assert_eq!(attacks.popcount(), 6);
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let e4 = Square::from_algebraic("e4").unwrap();
        let occ = Square::from_algebraic("e6").unwrap().to_bitboard();
        let q = queen_attacks(e4, occ);
        let r = rook_attacks(e4, occ);
        let b = bishop_attacks(e4, occ);
        assert_eq!(q, r | b);
    }
}
