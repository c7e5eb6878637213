//! Error types for board operations.

use std::fmt;

use super::Color;

/// Error type for loading a position string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position string is empty
    Empty,
    /// Placement field does not have 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 columns
    BadRowLength { row: usize, cols: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Loaded placement violates a board invariant
    InvalidPosition(StateError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty position string"),
            FenError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRowLength { row, cols } => {
                write!(f, "Row {row} describes {cols} columns, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {}

impl From<StateError> for FenError {
    fn from(err: StateError) -> Self {
        FenError::InvalidPosition(err)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rebuilding a game from an exported value tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A stored coordinate lies outside the 8x8 board
    SquareOutOfBounds { row: usize, col: usize },
    /// More than one king of the same color
    DuplicateKing { color: Color },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::SquareOutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) is off the board")
            }
            StateError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
        }
    }
}

impl std::error::Error for StateError {}
