//! Precomputed attack and mask tables.
//!
//! Built once, on first access, via a `once_cell::sync::Lazy` static, the idiom sibling engines
//! in this family use for movegen lookup tables instead of an explicit `init()` call the caller
//! must remember to make. Everything here is read-only after construction.

use once_cell::sync::Lazy;

use crate::bitboard::Bitboard;
use crate::types::Color;

pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
const MAIN_DIAG: u64 = 0x8040_2010_0804_0201; // a1-h8
const MAIN_ANTIDIAG: u64 = 0x0102_0408_1020_4080; // a8-h1

#[inline(always)]
const fn rank_mask(rank: u8) -> Bitboard {
    Bitboard(RANK_1.0 << (rank as u32 * 8))
}

#[inline(always)]
const fn file_mask(file: u8) -> Bitboard {
    Bitboard(FILE_A.0 << (file as u32))
}

fn diag_mask(sq: u8) -> Bitboard {
    let file = (sq & 7) as i32;
    let rank = (sq >> 3) as i32;
    let diag = file - rank;
    if diag >= 0 { Bitboard(MAIN_DIAG >> (8 * diag)) } else { Bitboard(MAIN_DIAG << (8 * -diag)) }
}

fn antidiag_mask(sq: u8) -> Bitboard {
    let file = (sq & 7) as i32;
    let rank = (sq >> 3) as i32;
    let adiag = rank + file - 7;
    if adiag >= 0 { Bitboard(MAIN_ANTIDIAG << (8 * adiag)) } else { Bitboard(MAIN_ANTIDIAG >> (8 * -adiag)) }
}

/// For a square *i* on the first rank and an 8-bit occupancy of that rank, the 8-bit set of
/// squares a slider on file *i* reaches: fill left until (and including) the first blocker, fill
/// right until (and including) the first blocker, union. Excludes the slider's own square.
fn first_rank_moves(file: u8, occ: u8) -> u8 {
    let mut attacks = 0u8;
    for f in (file + 1)..8 {
        attacks |= 1 << f;
        if occ & (1 << f) != 0 {
            break;
        }
    }
    for f in (0..file).rev() {
        attacks |= 1 << f;
        if occ & (1 << f) != 0 {
            break;
        }
    }
    attacks
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [(2, 1), (2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2), (-2, 1), (-2, -1)];
const KING_DELTAS: [(i8, i8); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

pub struct Tables {
    pub ranks: [Bitboard; 8],
    pub files: [Bitboard; 8],
    pub diag_masks: [Bitboard; 64],
    pub antidiag_masks: [Bitboard; 64],

    pub king_moves: [Bitboard; 64],
    pub knight_moves: [Bitboard; 64],
    /// Single push, OR'd with the double push from the starting rank.
    pub pawn_move: [[Bitboard; 64]; 2],
    pub pawn_capture: [[Bitboard; 64]; 2],
    /// Same geometry as `pawn_capture`, restricted to the rank a pawn of that color captures
    /// en passant from (rank 5 for white, rank 4 for black, 1-indexed).
    pub pawn_enpassant: [[Bitboard; 64]; 2],

    /// `first_rank_moves[file][occupancy]`.
    pub first_rank_moves: [[u8; 256]; 8],
}

impl Tables {
    fn build() -> Self {
        let mut ranks = [Bitboard::EMPTY; 8];
        let mut files = [Bitboard::EMPTY; 8];
        for i in 0..8u8 {
            ranks[i as usize] = rank_mask(i);
            files[i as usize] = file_mask(i);
        }

        let mut diag_masks = [Bitboard::EMPTY; 64];
        let mut antidiag_masks = [Bitboard::EMPTY; 64];
        let mut king_moves = [Bitboard::EMPTY; 64];
        let mut knight_moves = [Bitboard::EMPTY; 64];
        let mut pawn_move = [[Bitboard::EMPTY; 64]; 2];
        let mut pawn_capture = [[Bitboard::EMPTY; 64]; 2];
        let mut pawn_enpassant = [[Bitboard::EMPTY; 64]; 2];

        for sq in 0u8..64 {
            diag_masks[sq as usize] = diag_mask(sq);
            antidiag_masks[sq as usize] = antidiag_mask(sq);

            let rank = (sq / 8) as i8;
            let file = (sq % 8) as i8;

            for &(dr, df) in &KNIGHT_DELTAS {
                let (tr, tf) = (rank + dr, file + df);
                if (0..8).contains(&tr) && (0..8).contains(&tf) {
                    knight_moves[sq as usize] |= Bitboard::from_square((tr * 8 + tf) as usize);
                }
            }
            for &(dr, df) in &KING_DELTAS {
                let (tr, tf) = (rank + dr, file + df);
                if (0..8).contains(&tr) && (0..8).contains(&tf) {
                    king_moves[sq as usize] |= Bitboard::from_square((tr * 8 + tf) as usize);
                }
            }

            // White pawn geometry: pushes north (rank+1), captures to rank+1 diagonals.
            if rank < 7 {
                pawn_move[Color::White.index()][sq as usize] |= Bitboard::from_square((sq + 8) as usize);
                if file > 0 {
                    pawn_capture[Color::White.index()][sq as usize] |= Bitboard::from_square((sq + 7) as usize);
                }
                if file < 7 {
                    pawn_capture[Color::White.index()][sq as usize] |= Bitboard::from_square((sq + 9) as usize);
                }
            }
            if rank == 1 {
                pawn_move[Color::White.index()][sq as usize] |= Bitboard::from_square((sq + 16) as usize);
            }

            // Black pawn geometry: pushes south (rank-1), captures to rank-1 diagonals.
            if rank > 0 {
                pawn_move[Color::Black.index()][sq as usize] |= Bitboard::from_square((sq - 8) as usize);
                if file > 0 {
                    pawn_capture[Color::Black.index()][sq as usize] |= Bitboard::from_square((sq - 9) as usize);
                }
                if file < 7 {
                    pawn_capture[Color::Black.index()][sq as usize] |= Bitboard::from_square((sq - 7) as usize);
                }
            }
            if rank == 6 {
                pawn_move[Color::Black.index()][sq as usize] |= Bitboard::from_square((sq - 16) as usize);
            }

            // En passant capturers stand on rank 5 (white) or rank 4 (black), 1-indexed.
            if rank == 4 {
                pawn_enpassant[Color::White.index()][sq as usize] = pawn_capture[Color::White.index()][sq as usize];
            }
            if rank == 3 {
                pawn_enpassant[Color::Black.index()][sq as usize] = pawn_capture[Color::Black.index()][sq as usize];
            }
        }

        let mut first_rank_moves_table = [[0u8; 256]; 8];
        for file in 0u8..8 {
            for occ in 0u16..256 {
                first_rank_moves_table[file as usize][occ as usize] = first_rank_moves(file, occ as u8);
            }
        }

        Self {
            ranks,
            files,
            diag_masks,
            antidiag_masks,
            king_moves,
            knight_moves,
            pawn_move,
            pawn_capture,
            pawn_enpassant,
            first_rank_moves: first_rank_moves_table,
        }
    }
}

pub static TABLES: Lazy<Tables> = Lazy::new(Tables::build);
