use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, piece: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let dir = piece.color.pawn_direction();

        if let Some(single) = piece.square.offset(dir, 0) {
            if self.is_empty(single) {
                moves.push(single);
                // Double step keys off has_moved alone, so a stand-in
                // declared as a pawn may use it from any unmoved square.
                if !piece.has_moved {
                    if let Some(double) = piece.square.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for target in self.generate_pawn_attacks(piece) {
            if matches!(self.color_on(target), Some(c) if c != piece.color) {
                moves.push(target);
            }
        }

        moves
    }

    /// Both forward diagonals, occupied or not.
    pub(crate) fn generate_pawn_attacks(&self, piece: &Piece) -> Vec<Square> {
        let dir = piece.color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|d_col| piece.square.offset(dir, d_col))
            .collect()
    }
}
