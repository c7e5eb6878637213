//! Full game value tree: board plus deception bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CheckmateClaim, DeceptionLayer, DeceptionMove, RulesConfig};
use crate::board::{Board, BoardState, PerColor, Square, StateError};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeceptionState {
    /// Revealed squares in ascending (row, col) order
    pub revealed: Vec<Square>,
    pub last_move: Option<DeceptionMove>,
    pub liar_call_available: bool,
    pub turn_penalties: PerColor<u32>,
    pub checkmate_claims: Vec<CheckmateClaim>,
}

/// Everything a host needs to persist and later resume a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub deception: DeceptionState,
}

fn check_square(sq: Square) -> Result<(), StateError> {
    if sq.is_on_board() {
        Ok(())
    } else {
        Err(StateError::SquareOutOfBounds {
            row: sq.0,
            col: sq.1,
        })
    }
}

impl DeceptionLayer {
    /// Export the whole game. Rules configuration is not part of it.
    #[must_use]
    pub fn export_state(&self) -> GameState {
        GameState {
            board: self.board.to_state(),
            deception: DeceptionState {
                revealed: self.revealed.iter().copied().collect(),
                last_move: self.last_move,
                liar_call_available: self.liar_call_available,
                turn_penalties: self.turn_penalties,
                checkmate_claims: self.checkmate_claims.clone(),
            },
        }
    }

    /// Rebuild a game from an exported state.
    ///
    /// Fails if any stored square lies off the board or either side has
    /// more than one king. Claim snapshots are kept as stored.
    pub fn from_state(state: &GameState, config: RulesConfig) -> Result<Self, StateError> {
        let board = Board::from_state(&state.board)?;
        let deception = &state.deception;

        for &sq in &deception.revealed {
            check_square(sq)?;
        }
        if let Some(last) = &deception.last_move {
            check_square(last.from)?;
            check_square(last.to)?;
        }

        Ok(DeceptionLayer {
            board,
            revealed: deception.revealed.iter().copied().collect(),
            last_move: deception.last_move,
            liar_call_available: deception.liar_call_available,
            turn_penalties: deception.turn_penalties,
            checkmate_claims: deception.checkmate_claims.clone(),
            config,
        })
    }
}
