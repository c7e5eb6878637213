//! Attack, check and checkmate detection.

use super::{Board, Color, PieceType, Square};

impl Board {
    /// Whether any piece of `attacker` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|piece| self.attacked_squares(&piece).contains(&sq))
    }

    /// Whether `color`'s king is attacked. A board without that king is
    /// never in check.
    ///
    /// While a stand-in declared as a king is being probed the color briefly
    /// has two kings; either one being attacked counts as check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.pieces(color)
            .filter(|p| p.kind == PieceType::King)
            .any(|king| self.is_square_attacked(king.square, color.opponent()))
    }

    /// In check with no legal move.
    ///
    /// A side with no legal move that is not in check is not reported here
    /// or anywhere else; play simply continues.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }
}
