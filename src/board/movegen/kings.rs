use super::super::{Board, Piece, Square};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    // No castling in this variant.
    pub(crate) fn generate_king_moves(&self, piece: &Piece) -> Vec<Square> {
        self.generate_leaper_moves(piece, &KING_OFFSETS)
    }
}
