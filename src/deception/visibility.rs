//! Per-viewer projection of the board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::DeceptionLayer;
use crate::board::{Color, PieceType, Square};

/// One cell as a given viewer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisibleSquare {
    Empty,
    /// The viewer knows exactly what stands here
    Known { kind: PieceType, color: Color },
    /// An enemy piece of unknown type
    Hidden(Color),
}

impl VisibleSquare {
    /// Display glyph, or `None` for an empty square.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            VisibleSquare::Empty => None,
            VisibleSquare::Known { kind, color } => Some(kind.symbol(color)),
            VisibleSquare::Hidden(color) => Some(color.hidden_symbol()),
        }
    }
}

impl fmt::Display for VisibleSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().unwrap_or('.'))
    }
}

/// The whole board from one side's point of view, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibleBoard {
    pub viewer: Color,
    pub squares: [[VisibleSquare; 8]; 8],
}

impl VisibleBoard {
    /// The cell at `sq`; off-board squares read as empty.
    #[must_use]
    pub fn at(&self, sq: Square) -> VisibleSquare {
        if !sq.is_on_board() {
            return VisibleSquare::Empty;
        }
        self.squares[sq.0][sq.1]
    }

    /// Number of cells showing an enemy of unknown type.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, VisibleSquare::Hidden(_)))
            .count()
    }
}

impl fmt::Display for VisibleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl DeceptionLayer {
    /// Whether `viewer` knows the true type of the piece on `sq`.
    ///
    /// Own pieces are always known. Enemy pieces are known once their square
    /// is in the revealed set or the piece itself carries the revealed flag.
    /// An empty square has nothing to see.
    #[must_use]
    pub fn can_see(&self, sq: Square, viewer: Color) -> bool {
        match self.board.piece_at(sq) {
            None => false,
            Some(piece) if piece.color == viewer => true,
            Some(piece) => piece.is_revealed || self.revealed.contains(&sq),
        }
    }

    #[must_use]
    pub fn visible_board(&self, viewer: Color) -> VisibleBoard {
        let mut squares = [[VisibleSquare::Empty; 8]; 8];
        for sq in Square::all() {
            let Some(piece) = self.board.piece_at(sq) else {
                continue;
            };
            squares[sq.0][sq.1] = if self.can_see(sq, viewer) {
                VisibleSquare::Known {
                    kind: piece.kind,
                    color: piece.color,
                }
            } else {
                VisibleSquare::Hidden(piece.color)
            };
        }
        VisibleBoard { viewer, squares }
    }
}
