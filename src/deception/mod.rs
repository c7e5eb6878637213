//! The deception layer: hidden piece types, declared moves and challenges.
//!
//! A `DeceptionLayer` owns the game's `Board` and is the only way to change
//! it. Moves are validated against the piece type the player *declares*,
//! not the type that actually moves; the opponent may then call liar on
//! the declaration. Checkmate can also be claimed, and that claim can be
//! challenged in turn.
//!
//! # Example
//! ```
//! use liars_chess::board::{Color, PieceType, Square};
//! use liars_chess::deception::{DeceptionLayer, LiarCallOutcome};
//!
//! let mut game = DeceptionLayer::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! // A pawn declared as a queen: legal for a queen, so it is played.
//! game.make_deceptive_move(e2, e4, PieceType::Queen, Color::White).unwrap();
//! assert_eq!(game.call_liar(Color::Black), Ok(LiarCallOutcome::Successful));
//! ```

mod claims;
mod config;
mod error;
mod liar;
mod snapshot;
mod visibility;

use std::collections::BTreeSet;

pub use claims::{DeceptionMove, MoveReport};
pub use config::RulesConfig;
pub use error::{OptionError, RulesError};
pub use liar::{CheckmateClaim, LiarCallOutcome};
pub use snapshot::{DeceptionState, GameState};
pub use visibility::{VisibleBoard, VisibleSquare};

use crate::board::{Board, Color, PerColor, Square};

/// Board plus everything the deception rules track about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeceptionLayer {
    board: Board,
    /// Squares whose occupant is shown to both sides. Never shrinks.
    revealed: BTreeSet<Square>,
    last_move: Option<DeceptionMove>,
    liar_call_available: bool,
    turn_penalties: PerColor<u32>,
    checkmate_claims: Vec<CheckmateClaim>,
    config: RulesConfig,
}

impl Default for DeceptionLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl DeceptionLayer {
    /// A new game from the starting position with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), RulesConfig::default())
    }

    /// Wrap an existing board, e.g. a set-up position.
    #[must_use]
    pub fn with_board(board: Board, config: RulesConfig) -> Self {
        DeceptionLayer {
            board,
            revealed: BTreeSet::new(),
            last_move: None,
            liar_call_available: false,
            turn_penalties: PerColor::default(),
            checkmate_claims: Vec::new(),
            config,
        }
    }

    /// Read-only view of the true board. Hosts must not show it to players.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    /// Swap the rules for the rest of the game. Owed penalties keep their size.
    pub fn set_config(&mut self, config: RulesConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn revealed_squares(&self) -> &BTreeSet<Square> {
        &self.revealed
    }

    /// The most recent declared move, the only one that can be challenged.
    #[must_use]
    pub fn last_move(&self) -> Option<&DeceptionMove> {
        self.last_move.as_ref()
    }

    #[must_use]
    pub fn liar_call_available(&self) -> bool {
        self.liar_call_available
    }

    /// Turns `color` still has to skip.
    #[must_use]
    pub fn turn_penalty(&self, color: Color) -> u32 {
        self.turn_penalties[color]
    }

    #[must_use]
    pub fn checkmate_claims(&self) -> &[CheckmateClaim] {
        &self.checkmate_claims
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.board.current_turn()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Whether `color` is checkmated right now.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    /// Reveal whatever stands on `sq`, now and for any later occupant.
    fn reveal_square(&mut self, sq: Square) {
        self.revealed.insert(sq);
        if let Some(piece) = self.board.piece_at_mut(sq) {
            piece.is_revealed = true;
        }
    }

    /// Reveal every piece `color` currently owns.
    fn reveal_all_pieces(&mut self, color: Color) {
        let squares: Vec<Square> = self.board.pieces(color).map(|p| p.square).collect();
        for sq in squares {
            self.reveal_square(sq);
        }
    }

    fn ensure_in_progress(&self) -> Result<(), RulesError> {
        if self.board.is_game_over() {
            return Err(RulesError::GameAlreadyOver);
        }
        Ok(())
    }
}
