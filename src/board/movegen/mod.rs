//! Per-type movement rules and the self-check filter.
//!
//! `pseudo_moves` answers "where could this piece go by its own movement
//! rule"; `legal_moves` additionally drops every destination that would
//! leave the mover's king attacked. The filter relocates the piece in
//! place under a `SquareGuard`, so the board is restored exactly however
//! the probe exits.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Piece, PieceType, Square, SquareGuard};

impl Board {
    /// Destinations reachable by `piece`'s own movement rule, ignoring
    /// whether the move would expose its king.
    #[must_use]
    pub fn pseudo_moves(&self, piece: &Piece) -> Vec<Square> {
        match piece.kind {
            PieceType::Pawn => self.generate_pawn_moves(piece),
            PieceType::Rook => self.generate_slider_moves(piece, SliderType::Rook),
            PieceType::Bishop => self.generate_slider_moves(piece, SliderType::Bishop),
            PieceType::Queen => self.generate_slider_moves(piece, SliderType::Queen),
            PieceType::Knight => self.generate_knight_moves(piece),
            PieceType::King => self.generate_king_moves(piece),
        }
    }

    /// Squares `piece` attacks. Equal to its pseudo moves except for pawns,
    /// which attack both forward diagonals and never straight ahead.
    #[must_use]
    pub fn attacked_squares(&self, piece: &Piece) -> Vec<Square> {
        match piece.kind {
            PieceType::Pawn => self.generate_pawn_attacks(piece),
            PieceType::Rook
            | PieceType::Bishop
            | PieceType::Queen
            | PieceType::Knight
            | PieceType::King => self.pseudo_moves(piece),
        }
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Takes `&mut self` because every candidate is tried on the board
    /// itself; the contents are identical again when this returns.
    pub fn legal_moves(&mut self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        self.pseudo_moves(&piece)
            .into_iter()
            .filter(|&to| self.leaves_king_safe(from, to, piece.color))
            .collect()
    }

    /// Legal destinations a piece of type `kind` would have from `from`.
    ///
    /// The real piece is temporarily swapped for a stand-in of `kind` with
    /// the same color and `has_moved` flag. Empty if `from` holds no piece.
    pub fn legal_moves_as(&mut self, from: Square, kind: PieceType) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut probe = SquareGuard::new(self);
        probe.place(from, Some(piece.disguised_as(kind)));
        probe.legal_moves(from)
    }

    /// Whether any piece of `color` has at least one legal move.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self.pieces(color).map(|p| p.square).collect();
        origins
            .into_iter()
            .any(|from| !self.legal_moves(from).is_empty())
    }

    fn leaves_king_safe(&mut self, from: Square, to: Square, color: Color) -> bool {
        let mut probe = SquareGuard::new(self);
        probe.relocate(from, to);
        !probe.is_in_check(color)
    }

    /// Offsets landing on empty or enemy squares. Shared by knights and kings.
    pub(crate) fn generate_leaper_moves(
        &self,
        piece: &Piece,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| piece.square.offset(d_row, d_col))
            .filter(|&to| self.color_on(to) != Some(piece.color))
            .collect()
    }
}
