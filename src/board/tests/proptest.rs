//! Property-based tests using proptest.

use crate::board::{Board, Color, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_board(seed: u64, num_moves: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        if board.is_game_over() {
            break;
        }
        let color = board.current_turn();
        let origins: Vec<Square> = board.pieces(color).map(|p| p.square).collect();
        let choices: Vec<(Square, Square)> = origins
            .into_iter()
            .flat_map(|from| {
                board
                    .legal_moves(from)
                    .into_iter()
                    .map(move |to| (from, to))
                    .collect::<Vec<_>>()
            })
            .collect();
        let Some(&(from, to)) = choices.choose(&mut rng) else {
            break;
        };
        board.commit_move(from, to);
    }
    board
}

proptest! {
    /// Property: computing every legal move leaves the board byte-identical
    #[test]
    fn prop_legality_probe_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_board(seed, num_moves);
        let before = board.clone();
        for color in Color::BOTH {
            let origins: Vec<Square> = board.pieces(color).map(|p| p.square).collect();
            for from in origins {
                board.legal_moves(from);
            }
        }
        prop_assert_eq!(board, before);
    }

    /// Property: a pseudo move is legal iff playing it leaves the own king safe
    #[test]
    fn prop_legal_set_matches_king_safety(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_board(seed, num_moves);
        let color = board.current_turn();
        let pieces: Vec<_> = board.pieces(color).collect();
        for piece in pieces {
            let legal = board.legal_moves(piece.square);
            for to in board.pseudo_moves(&piece) {
                let mut trial = board.clone();
                trial.set_piece(piece.square, None);
                trial.set_piece(to, Some(piece));
                prop_assert_eq!(legal.contains(&to), !trial.is_in_check(color));
            }
        }
    }

    /// Property: export/import round-trips every reachable board
    #[test]
    fn prop_state_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_board(seed, num_moves);
        let restored = Board::from_state(&board.to_state()).unwrap();
        prop_assert_eq!(restored, board);
    }

    /// Property: stand-in probes never disturb the real piece
    #[test]
    fn prop_stand_in_probe_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_board(seed, num_moves);
        let before = board.clone();
        let origins: Vec<Square> = board.pieces(board.current_turn()).map(|p| p.square).collect();
        for from in origins {
            for kind in crate::board::PieceType::ALL {
                board.legal_moves_as(from, kind);
            }
        }
        prop_assert_eq!(board, before);
    }
}
