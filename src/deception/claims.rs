//! Declared moves: validation against the claimed type, and execution.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{DeceptionLayer, RulesError};
use crate::board::{Color, PieceType, Square};

/// The most recent declared move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeceptionMove {
    pub from: Square,
    pub to: Square,
    pub claimed: PieceType,
    pub actual: PieceType,
    pub acting_color: Color,
}

impl DeceptionMove {
    /// Whether the declared type differs from the piece that moved.
    #[must_use]
    pub fn is_lie(&self) -> bool {
        self.claimed != self.actual
    }
}

/// What the mover learns about a move that was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Square,
    pub to: Square,
    pub claimed: PieceType,
    /// Something stood on `to` and was removed
    pub captured: bool,
    /// The opponent is now in check
    pub gives_check: bool,
    /// The move mated the opponent and ended the game
    pub checkmate: bool,
}

impl DeceptionLayer {
    /// Whether a piece of `claimed` type standing on `from` could legally
    /// move to `to`.
    ///
    /// Only the declared type matters: a stand-in of that type, with the real
    /// piece's color and `has_moved` flag, is probed in place of the real
    /// piece. `color` is the side the stand-in plays for.
    pub fn validate_claimed_move(
        &mut self,
        from: Square,
        to: Square,
        claimed: PieceType,
        color: Color,
    ) -> bool {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == color => {
                self.board.legal_moves_as(from, claimed).contains(&to)
            }
            _ => false,
        }
    }

    /// Play `from` -> `to` while declaring it a `claimed` move.
    ///
    /// Preconditions are checked in this order: the game is running, `from`
    /// holds an `acting` piece, `acting` is on move (when the rules enforce
    /// turn order), `acting` owes no penalty, and the declared type can make
    /// the move. Paying a penalty is the only failure that changes state:
    /// the penalty drops by one and the turn passes.
    pub fn make_deceptive_move(
        &mut self,
        from: Square,
        to: Square,
        claimed: PieceType,
        acting: Color,
    ) -> Result<MoveReport, RulesError> {
        self.ensure_in_progress()?;

        let piece = self
            .board
            .piece_at(from)
            .ok_or(RulesError::NoPieceAtOrigin { square: from })?;
        if piece.color != acting {
            return Err(RulesError::WrongColorToMove {
                square: from,
                color: acting,
            });
        }
        if self.config.enforce_turn_order && self.board.current_turn() != acting {
            return Err(RulesError::NotCurrentTurn { color: acting });
        }

        if self.turn_penalties[acting] > 0 {
            self.turn_penalties[acting] -= 1;
            self.board.give_turn_to(acting.opponent());
            self.liar_call_available = false;
            return Err(RulesError::TurnSkippedByPenalty {
                color: acting,
                remaining: self.turn_penalties[acting],
            });
        }

        if !self.validate_claimed_move(from, to, claimed, acting) {
            return Err(RulesError::IllegalForClaimedType { from, to, claimed });
        }

        let record = self
            .board
            .commit_move(from, to)
            .ok_or(RulesError::IllegalForClaimedType { from, to, claimed })?;

        self.last_move = Some(DeceptionMove {
            from,
            to,
            claimed,
            actual: piece.kind,
            acting_color: acting,
        });
        self.liar_call_available = true;

        Ok(MoveReport {
            from,
            to,
            claimed,
            captured: record.captured.is_some(),
            gives_check: self.board.is_in_check(acting.opponent()),
            checkmate: self.board.is_game_over(),
        })
    }

    /// For every piece type, the squares a piece of that type would reach
    /// from `from`. Types with no legal move are left out; the map is empty
    /// when `from` does not hold a piece of `color`.
    pub fn move_options(&mut self, from: Square, color: Color) -> BTreeMap<PieceType, Vec<Square>> {
        let mut options = BTreeMap::new();
        if self.board.color_on(from) != Some(color) {
            return options;
        }
        for kind in PieceType::ALL {
            let moves = self.board.legal_moves_as(from, kind);
            if !moves.is_empty() {
                options.insert(kind, moves);
            }
        }
        options
    }

    /// Types that could be declared for `from` -> `to`.
    pub fn declarable_types(&mut self, from: Square, to: Square, color: Color) -> Vec<PieceType> {
        self.move_options(from, color)
            .into_iter()
            .filter(|(_, moves)| moves.contains(&to))
            .map(|(kind, _)| kind)
            .collect()
    }

    /// Squares holding a `color` piece that can make at least one declared move.
    pub fn movable_pieces(&mut self, color: Color) -> Vec<Square> {
        let origins: Vec<Square> = self.board.pieces(color).map(|p| p.square).collect();
        origins
            .into_iter()
            .filter(|&from| !self.move_options(from, color).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder};
    use crate::deception::RulesConfig;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_claim_judged_by_declared_type_only() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        let mut game = DeceptionLayer::with_board(board, RulesConfig::default());
        // A rook stepping diagonally is illegal when declared a rook...
        assert!(!game.validate_claimed_move(sq("a1"), sq("b2"), PieceType::Rook, Color::White));
        // ...and legal when declared a bishop, king or queen.
        assert!(game.validate_claimed_move(sq("a1"), sq("b2"), PieceType::Bishop, Color::White));
        assert!(game.validate_claimed_move(sq("a1"), sq("b2"), PieceType::King, Color::White));
        assert!(game.validate_claimed_move(sq("a1"), sq("b2"), PieceType::Queen, Color::White));
    }

    #[test]
    fn test_claim_probe_does_not_change_board() {
        let mut game = DeceptionLayer::new();
        let before = game.clone();
        for kind in PieceType::ALL {
            game.validate_claimed_move(sq("g1"), sq("g3"), kind, Color::White);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_truthful_move_records_claim() {
        let mut game = DeceptionLayer::new();
        let report = game
            .make_deceptive_move(sq("e2"), sq("e4"), PieceType::Pawn, Color::White)
            .unwrap();
        assert!(!report.captured);
        assert!(!report.checkmate);

        let last = *game.last_move().unwrap();
        assert_eq!(last.actual, PieceType::Pawn);
        assert!(!last.is_lie());
        assert!(game.liar_call_available());
        assert_eq!(game.current_turn(), Color::Black);
        assert_eq!(game.board().move_count(), 1);
    }

    #[test]
    fn test_lie_moves_the_real_piece() {
        let mut game = DeceptionLayer::new();
        game.make_deceptive_move(sq("e2"), sq("e4"), PieceType::Queen, Color::White)
            .unwrap();
        let moved = game.board().piece_at(sq("e4")).unwrap();
        assert_eq!(moved.kind, PieceType::Pawn);
        assert!(moved.has_moved);
        assert!(game.last_move().unwrap().is_lie());
        assert_eq!(game.board().history()[0].moved, PieceType::Pawn);
    }

    #[test]
    fn test_rejections_leave_game_untouched() {
        let mut game = DeceptionLayer::new();
        let before = game.clone();

        assert_eq!(
            game.make_deceptive_move(sq("e4"), sq("e5"), PieceType::Pawn, Color::White),
            Err(RulesError::NoPieceAtOrigin { square: sq("e4") })
        );
        assert_eq!(
            game.make_deceptive_move(sq("e7"), sq("e5"), PieceType::Pawn, Color::White),
            Err(RulesError::WrongColorToMove {
                square: sq("e7"),
                color: Color::White
            })
        );
        assert_eq!(
            game.make_deceptive_move(sq("e7"), sq("e5"), PieceType::Pawn, Color::Black),
            Err(RulesError::NotCurrentTurn {
                color: Color::Black
            })
        );
        assert_eq!(
            game.make_deceptive_move(sq("e2"), sq("e5"), PieceType::Pawn, Color::White),
            Err(RulesError::IllegalForClaimedType {
                from: sq("e2"),
                to: sq("e5"),
                claimed: PieceType::Pawn
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_turn_order_can_be_relaxed() {
        let config = RulesConfig::default().enforce_turn_order(false);
        let mut game = DeceptionLayer::with_board(Board::new(), config);
        game.make_deceptive_move(sq("e7"), sq("e5"), PieceType::Pawn, Color::Black)
            .unwrap();
        // Black moved out of turn, so White stays on move.
        assert_eq!(game.current_turn(), Color::White);
        game.make_deceptive_move(sq("d7"), sq("d5"), PieceType::Pawn, Color::Black)
            .unwrap();
        assert_eq!(game.current_turn(), Color::White);
    }

    #[test]
    fn test_out_of_turn_mate_ends_game() {
        let board = Board::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 w").unwrap();
        let config = RulesConfig::default().enforce_turn_order(false);
        let mut game = DeceptionLayer::with_board(board, config);
        let report = game
            .make_deceptive_move(sq("a8"), sq("a1"), PieceType::Rook, Color::Black)
            .unwrap();
        assert!(report.gives_check);
        assert!(report.checkmate);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(game.current_turn(), Color::White);
    }

    #[test]
    fn test_mating_move_ends_game_for_mover() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w").unwrap();
        let mut game = DeceptionLayer::with_board(board, RulesConfig::default());
        // The rook goes up the file declared as a queen.
        let report = game
            .make_deceptive_move(sq("a1"), sq("a8"), PieceType::Queen, Color::White)
            .unwrap();
        assert!(report.gives_check);
        assert!(report.checkmate);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Color::White));
        assert_eq!(
            game.make_deceptive_move(sq("g8"), sq("h8"), PieceType::King, Color::Black),
            Err(RulesError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_capture_is_reported() {
        let board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
        let mut game = DeceptionLayer::with_board(board, RulesConfig::default());
        let report = game
            .make_deceptive_move(sq("e4"), sq("d5"), PieceType::Bishop, Color::White)
            .unwrap();
        assert!(report.captured);
        assert_eq!(game.board().history()[0].captured, Some(PieceType::Pawn));
    }

    #[test]
    fn test_move_options_per_type() {
        let mut game = DeceptionLayer::new();
        let options = game.move_options(sq("b1"), Color::White);
        assert_eq!(options.get(&PieceType::Knight).map(Vec::len), Some(2));
        // Boxed in on the back row, sliders and kings have nothing.
        assert!(!options.contains_key(&PieceType::Rook));
        assert!(!options.contains_key(&PieceType::Bishop));
        assert!(!options.contains_key(&PieceType::Queen));
        assert!(!options.contains_key(&PieceType::King));
        assert!(!options.contains_key(&PieceType::Pawn));

        assert!(game.move_options(sq("b8"), Color::White).is_empty());
        assert!(game.move_options(sq("e4"), Color::White).is_empty());
    }

    #[test]
    fn test_declarable_types_for_destination() {
        let mut game = DeceptionLayer::new();
        assert_eq!(
            game.declarable_types(sq("e2"), sq("e4"), Color::White),
            vec![PieceType::Pawn, PieceType::Rook, PieceType::Queen]
        );
        assert_eq!(
            game.declarable_types(sq("e2"), sq("f3"), Color::White),
            vec![PieceType::Bishop, PieceType::Queen, PieceType::King]
        );
    }

    #[test]
    fn test_movable_pieces_from_start() {
        let mut game = DeceptionLayer::new();
        let movable = game.movable_pieces(Color::White);
        // Every back-row piece can at least be declared a knight.
        assert_eq!(movable.len(), 16);
        assert!(movable.contains(&sq("d1")));
        assert_eq!(game.movable_pieces(Color::Black).len(), 16);
    }

    #[test]
    fn test_builder_position_with_revealed_piece() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceType::King)
            .piece(sq("e8"), Color::Black, PieceType::King)
            .piece(sq("c3"), Color::White, PieceType::Knight)
            .build();
        let mut game = DeceptionLayer::with_board(board, RulesConfig::default());
        assert!(game.validate_claimed_move(sq("c3"), sq("c5"), PieceType::Rook, Color::White));
        assert!(!game.validate_claimed_move(sq("c3"), sq("c5"), PieceType::Rook, Color::Black));
    }
}
