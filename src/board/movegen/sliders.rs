use super::super::{Board, Piece, Square};

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Cast a ray per direction, stopping at the first occupied square,
    /// which is included only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, slider: SliderType) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14);
        for &(d_row, d_col) in slider.directions() {
            let mut current = piece.square;
            while let Some(next) = current.offset(d_row, d_col) {
                match self.color_on(next) {
                    None => moves.push(next),
                    Some(color) => {
                        if color != piece.color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
