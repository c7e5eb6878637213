//! Board value tree used by the persistence collaborator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, MoveRecord, Piece, PieceType, Square, StateError};

/// One occupied cell. Position is implied by the cell's place in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceState {
    pub kind: PieceType,
    pub color: Color,
    pub has_moved: bool,
    pub is_revealed: bool,
}

/// Full board contents, turn, outcome and history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardState {
    /// Row-major grid, row 0 first
    pub squares: [[Option<PieceState>; 8]; 8],
    pub current_turn: Color,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub history: Vec<MoveRecord>,
}

impl From<Piece> for PieceState {
    fn from(piece: Piece) -> Self {
        PieceState {
            kind: piece.kind,
            color: piece.color,
            has_moved: piece.has_moved,
            is_revealed: piece.is_revealed,
        }
    }
}

impl Board {
    /// Export everything needed to rebuild this board.
    #[must_use]
    pub fn to_state(&self) -> BoardState {
        let mut squares = [[None; 8]; 8];
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                squares[row][col] = cell.map(PieceState::from);
            }
        }
        BoardState {
            squares,
            current_turn: self.current_turn,
            game_over: self.game_over,
            winner: self.winner,
            history: self.history.clone(),
        }
    }

    /// Rebuild a board from an exported state.
    pub fn from_state(state: &BoardState) -> Result<Board, StateError> {
        let mut board = Board::empty();
        for (row, cells) in state.squares.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let square = Square(row, col);
                board.set_piece(
                    square,
                    cell.map(|p| Piece {
                        kind: p.kind,
                        color: p.color,
                        square,
                        has_moved: p.has_moved,
                        is_revealed: p.is_revealed,
                    }),
                );
            }
        }
        board.current_turn = state.current_turn;
        board.game_over = state.game_over;
        board.winner = state.winner;
        board.history = state.history.clone();
        board.validate()?;
        Ok(board)
    }
}
