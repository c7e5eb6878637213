pub mod board;
pub mod deception;
pub mod engine;

pub use board::{Board, Color, Piece, PieceType, Square};
pub use deception::{DeceptionLayer, LiarCallOutcome, RulesConfig, RulesError};
pub use engine::{GameController, GameStatus, SharedGame};
