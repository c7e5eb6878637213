//! Error types for the deception layer.

use std::fmt;

use crate::board::{Color, PieceType, Square};

/// Why a move, liar call or checkmate challenge was not applied.
///
/// Every variant leaves the game consistent. `TurnSkippedByPenalty` is the
/// one failure that changes state: the turn passes and the penalty shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// No piece stands on the origin square
    NoPieceAtOrigin { square: Square },
    /// The origin piece belongs to the other color
    WrongColorToMove { square: Square, color: Color },
    /// The acting color is not on move
    NotCurrentTurn { color: Color },
    /// The attempt paid down an outstanding penalty instead of moving
    TurnSkippedByPenalty { color: Color, remaining: u32 },
    /// The declared type cannot legally reach the destination
    IllegalForClaimedType {
        from: Square,
        to: Square,
        claimed: PieceType,
    },
    /// No outstanding move claim can be challenged
    NoLiarCallAvailable,
    /// No checkmate claim has been made
    NoCheckmateClaimToChallenge,
    /// The game has already ended
    GameAlreadyOver,
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::NoPieceAtOrigin { square } => write!(f, "No piece on {square}"),
            RulesError::WrongColorToMove { square, color } => {
                write!(f, "The piece on {square} does not belong to {color}")
            }
            RulesError::NotCurrentTurn { color } => write!(f, "It is not {color}'s turn"),
            RulesError::TurnSkippedByPenalty { color, remaining } => write!(
                f,
                "{color} skips this turn as a penalty ({remaining} more to skip)"
            ),
            RulesError::IllegalForClaimedType { from, to, claimed } => {
                write!(f, "A {claimed} cannot move from {from} to {to}")
            }
            RulesError::NoLiarCallAvailable => write!(f, "There is no move to call liar on"),
            RulesError::NoCheckmateClaimToChallenge => {
                write!(f, "There is no checkmate claim to challenge")
            }
            RulesError::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for RulesError {}

/// Error type for configuration key/value updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// No option with this name
    UnknownOption { name: String },
    /// The value could not be parsed for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_claim_message() {
        let err = RulesError::IllegalForClaimedType {
            from: Square(6, 4),
            to: Square(3, 4),
            claimed: PieceType::Pawn,
        };
        assert_eq!(err.to_string(), "A pawn cannot move from e2 to e5");
    }

    #[test]
    fn test_penalty_message_names_color() {
        let err = RulesError::TurnSkippedByPenalty {
            color: Color::Black,
            remaining: 0,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_option_error_messages() {
        let err = OptionError::UnknownOption {
            name: "hash".to_string(),
        };
        assert!(err.to_string().contains("'hash'"));
        let err = OptionError::InvalidValue {
            name: "failed_call_penalty".to_string(),
            value: "-1".to_string(),
        };
        assert!(err.to_string().contains("'-1'"));
    }
}
