//! Board representation and orthodox move rules.
//!
//! An 8x8 mailbox of optional pieces plus turn/outcome tracking. Move
//! generation is per piece type; legality is decided by trying each
//! candidate on the board itself and restoring it afterwards. There is no
//! castling, en passant or promotion.
//!
//! # Example
//! ```
//! use liars_chess::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! assert_eq!(board.legal_moves(e2).len(), 2);
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, SquareError, StateError};
pub use snapshot::{BoardState, PieceState};
pub use state::{Board, MoveRecord};
pub use types::{Color, PerColor, Piece, PieceType, Square};

pub(crate) use make_unmake::SquareGuard;
