//! Deeper perft checks: expensive enough (millions of leaf nodes) that they live here rather
//! than in `src/perft.rs`'s unit tests, which only cover the cheap depths.

use chess_core::board::Board;
use chess_core::perft::perft;

#[test]
fn starting_position_perft_depth_5() {
    let board = Board::starting_position();
    assert_eq!(perft(&board, 5), 4_865_609);
}

#[test]
fn kiwipete_perft_depth_3() {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(perft(&board, 3), 97_862);
}
