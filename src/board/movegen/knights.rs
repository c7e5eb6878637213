use super::super::{Board, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, piece: &Piece) -> Vec<Square> {
        self.generate_leaper_moves(piece, &KNIGHT_OFFSETS)
    }
}
