//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use liars_chess::board::{BoardBuilder, Color, PieceType, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceType::King)
//!     .piece(Square(0, 4), Color::Black, PieceType::King)
//!     .moved_piece(Square(4, 0), Color::White, PieceType::Pawn)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.current_turn(), Color::Black);
//! ```

use super::{Board, Color, Piece, PieceType, Square, StateError};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(start.pieces(color));
        }
        builder
    }

    fn put(mut self, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|p| p.square != piece.square);
        self.pieces.push(piece);
        self
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceType) -> Self {
        self.put(Piece::new(kind, color, square))
    }

    /// Place a piece that has already moved (no pawn double step).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceType) -> Self {
        let mut piece = Piece::new(kind, color, square);
        piece.has_moved = true;
        self.put(piece)
    }

    /// Mark the piece on `square`, if any, as permanently revealed.
    #[must_use]
    pub fn revealed(mut self, square: Square) -> Self {
        for piece in self.pieces.iter_mut().filter(|p| p.square == square) {
            piece.is_revealed = true;
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board. Off-board squares are dropped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.set_piece(piece.square, Some(piece));
        }
        board.current_turn = self.side_to_move;
        board
    }

    /// Build the board, rejecting positions with two kings of one color.
    pub fn try_build(self) -> Result<Board, StateError> {
        let board = self.build();
        board.validate()?;
        Ok(board)
    }
}
