//! Core board types.
//!
//! - `PieceType` and `Color` - piece kinds and sides
//! - `Piece` - a piece standing on the board, with its move/reveal flags
//! - `Square` - (row, col) coordinate
//! - `PerColor` - a value kept once for each side

mod per_color;
mod piece;
mod square;

pub use per_color::PerColor;
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
