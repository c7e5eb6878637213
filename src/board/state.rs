use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceType, Square, StateError};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for color in Color::BOTH {
        let back = color.back_row();
        let pawns = color.pawn_start_row();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(back, col), Some(Piece::new(kind, color, Square(back, col))));
            board.set_piece(
                Square(pawns, col),
                Some(Piece::new(PieceType::Pawn, color, Square(pawns, col))),
            );
        }
    }
    board
});

/// One entry of the append-only move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// True type of the piece that moved
    pub moved: PieceType,
    /// True type of the piece removed from `to`, if any
    pub captured: Option<PieceType>,
    /// Color that made the move
    pub turn: Color,
}

/// 8x8 grid of optional pieces plus turn and outcome tracking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) current_turn: Color,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Color>,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The orthodox starting array, White to move.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            current_turn: Color::White,
            game_over: false,
            winner: None,
            history: Vec::new(),
        }
    }

    /// The piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.0][sq.1].as_mut()
    }

    /// Place (or clear) a square. Off-board squares are ignored.
    ///
    /// The stored piece's `square` is rewritten to `sq`.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        if !sq.is_on_board() {
            return;
        }
        self.squares[sq.0][sq.1] = piece.map(|mut p| {
            p.square = sq;
            p
        });
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Hand the move to `color`.
    pub(crate) fn give_turn_to(&mut self, color: Color) {
        self.current_turn = color;
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub(crate) fn finish(&mut self, winner: Color) {
        self.game_over = true;
        self.winner = Some(winner);
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push(record);
    }

    /// All pieces of `color`, row by row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .copied()
            .filter(move |p| p.color == color)
    }

    /// Square of `color`'s king, if one is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind == PieceType::King)
            .map(|p| p.square)
    }

    /// Check the one-king-per-color invariant.
    pub fn validate(&self) -> Result<(), StateError> {
        for color in Color::BOTH {
            let kings = self
                .pieces(color)
                .filter(|p| p.kind == PieceType::King)
                .count();
            if kings > 1 {
                return Err(StateError::DuplicateKing { color });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::new();
        assert_eq!(board.current_turn(), Color::White);
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(board.king_square(Color::White), Some(Square(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(0, 4)));
        let e2 = board.piece_at(Square(6, 4)).unwrap();
        assert_eq!(e2.kind, PieceType::Pawn);
        assert_eq!(e2.color, Color::White);
        assert_eq!(e2.square, Square(6, 4));
        assert!(!e2.has_moved);
    }

    #[test]
    fn test_off_board_access_is_noop() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.piece_at(Square(8, 0)), None);
        assert_eq!(board.piece_at(Square(0, 12)), None);
        board.set_piece(
            Square(9, 9),
            Some(Piece::new(PieceType::Queen, Color::White, Square(9, 9))),
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_piece_updates_position() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceType::Rook, Color::Black, Square(0, 0));
        board.set_piece(Square(3, 5), Some(rook));
        assert_eq!(board.piece_at(Square(3, 5)).unwrap().square, Square(3, 5));
        board.set_piece(Square(3, 5), None);
        assert!(board.is_empty(Square(3, 5)));
    }

    #[test]
    fn test_validate_rejects_second_king() {
        let mut board = Board::new();
        board.set_piece(
            Square(4, 4),
            Some(Piece::new(PieceType::King, Color::White, Square(4, 4))),
        );
        assert_eq!(
            board.validate(),
            Err(StateError::DuplicateKing {
                color: Color::White
            })
        );
    }
}
