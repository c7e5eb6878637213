//! Board mutation: scoped probes that always restore, and committed moves.

use std::ops::{Deref, DerefMut};

use super::{Board, MoveRecord, Piece, Square};

/// Scoped mutation of a few squares that is undone when the guard drops.
///
/// The first write to a square snapshots its previous contents; `Drop`
/// writes the snapshots back in reverse order, on every exit path. While
/// the guard lives, the board is reachable through `Deref`/`DerefMut`, so
/// probes can nest (a stand-in piece probe runs legality probes inside).
pub(crate) struct SquareGuard<'a> {
    board: &'a mut Board,
    saved: Vec<(Square, Option<Piece>)>,
}

impl<'a> SquareGuard<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Self {
        SquareGuard {
            board,
            saved: Vec::with_capacity(2),
        }
    }

    fn snapshot(&mut self, sq: Square) {
        if sq.is_on_board() && !self.saved.iter().any(|(saved, _)| *saved == sq) {
            let previous = self.board.piece_at(sq);
            self.saved.push((sq, previous));
        }
    }

    /// Overwrite one square for the lifetime of the guard.
    pub(crate) fn place(&mut self, sq: Square, piece: Option<Piece>) {
        self.snapshot(sq);
        self.board.set_piece(sq, piece);
    }

    /// Move whatever stands on `from` to `to`, dropping any occupant of `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let moving = self.board.piece_at(from);
        self.place(to, moving);
        self.place(from, None);
    }
}

impl Deref for SquareGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for SquareGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for SquareGuard<'_> {
    fn drop(&mut self) {
        while let Some((sq, piece)) = self.saved.pop() {
            self.board.squares[sq.0][sq.1] = piece;
        }
    }
}

impl Board {
    /// Physically play `from` -> `to` without any legality check.
    ///
    /// Captures the occupant of `to`, marks the piece moved, appends to the
    /// history, gives the turn to the mover's opponent and, if that side is
    /// mated, ends the game in the mover's favour. Returns `None` (and changes
    /// nothing) when `from` is empty or `to` is off the board.
    ///
    /// Crate-private: callers outside go through the deception layer,
    /// which validates the declared type first.
    pub(crate) fn commit_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let mut piece = self.piece_at(from)?;
        if !to.is_on_board() || from == to {
            return None;
        }
        let captured = self.piece_at(to).map(|p| p.kind);
        piece.has_moved = true;
        self.set_piece(from, None);
        self.set_piece(to, Some(piece));

        let record = MoveRecord {
            from,
            to,
            moved: piece.kind,
            captured,
            turn: piece.color,
        };
        self.record_move(record);

        // The mover's opponent is on move next, even if the mover played
        // out of turn.
        let opponent = piece.color.opponent();
        self.give_turn_to(opponent);
        if self.is_checkmate(opponent) {
            self.finish(piece.color);
        }
        Some(record)
    }
}
