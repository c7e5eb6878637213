//! Loading and printing positions in the placement/side fields of FEN.
//!
//! Castling, en passant and the move clocks do not exist in this variant;
//! any trailing fields are ignored. The first placement row is row 0.

use super::error::FenError;
use super::{Board, Color, Piece, PieceType, Square};

impl Board {
    /// Parse a position from FEN placement and (optional) side to move.
    ///
    /// Pawns standing off their color's starting row load as moved; every
    /// other piece loads unmoved and unrevealed.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceType::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::BadRowLength { row, cols: col + 1 });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square(row, col);
                let mut piece = Piece::new(kind, color, square);
                piece.has_moved = kind == PieceType::Pawn && row != color.pawn_start_row();
                board.set_piece(square, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRowLength { row, cols: col });
            }
        }

        board.current_turn = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.validate()?;
        Ok(board)
    }

    /// Placement and side-to-move fields for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(72);
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let c = piece.kind.to_char();
                        fen.push(if piece.color == Color::White {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        });
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen.push(' ');
        fen.push(if self.current_turn == Color::White { 'w' } else { 'b' });
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    #[test]
    fn test_start_position_roundtrip() {
        let board = Board::from_fen(START).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(Board::new().to_fen(), START);
    }

    #[test]
    fn test_trailing_fields_ignored() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b KQkq - 0 1").unwrap();
        assert_eq!(board.current_turn(), Color::Black);
        assert_eq!(board.king_square(Color::White), Some(Square(7, 4)));
    }

    #[test]
    fn test_advanced_pawn_loads_as_moved() {
        let board = Board::from_fen("4k3/8/8/4P3/8/8/3P4/4K3 w").unwrap();
        assert!(board.piece_at(Square(3, 4)).unwrap().has_moved);
        assert!(!board.piece_at(Square(6, 3)).unwrap().has_moved);
    }

    #[test]
    fn test_errors() {
        assert_eq!(Board::from_fen(""), Err(FenError::Empty));
        assert_eq!(
            Board::from_fen("8/8/8 w"),
            Err(FenError::WrongRowCount { found: 3 })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/7x w"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/7 w"),
            Err(FenError::BadRowLength { row: 7, cols: 7 })
        );
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            Board::from_fen("KK6/8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPosition(_))
        ));
    }
}
