//! Challenges: liar calls on moves, checkmate claims and their challenges.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{DeceptionLayer, RulesError};
use crate::board::{BoardState, Color};

/// How a challenge resolved. An invalid challenge is a `RulesError` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiarCallOutcome {
    /// The challenged claim was false
    Successful,
    /// The challenged claim was true; the challenger pays
    Failed,
}

impl fmt::Display for LiarCallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiarCallOutcome::Successful => {
                write!(f, "Liar call successful! The lie has been revealed.")
            }
            LiarCallOutcome::Failed => write!(f, "Liar call failed! The claim was true."),
        }
    }
}

/// A recorded claim that the claimant's opponent is checkmated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckmateClaim {
    pub claimant: Color,
    /// Number of moves played when the claim was made
    pub move_index: usize,
    pub snapshot: BoardState,
}

impl DeceptionLayer {
    /// Challenge the last declared move.
    ///
    /// A lie reveals the moved piece and its square for good. A truthful
    /// move costs `calling` the configured penalty. Either way the move can
    /// no longer be challenged; the turn does not change.
    pub fn call_liar(&mut self, calling: Color) -> Result<LiarCallOutcome, RulesError> {
        self.ensure_in_progress()?;

        let available = std::mem::take(&mut self.liar_call_available);
        let last = match self.last_move {
            Some(last) if available => last,
            _ => return Err(RulesError::NoLiarCallAvailable),
        };

        if last.is_lie() {
            self.reveal_square(last.to);
            Ok(LiarCallOutcome::Successful)
        } else {
            self.turn_penalties[calling] = self.config.failed_call_penalty;
            Ok(LiarCallOutcome::Failed)
        }
    }

    /// Claim that `claimant`'s opponent is checkmated.
    ///
    /// The claim is recorded with a snapshot of the board. The return value
    /// says whether the claim is true right now; it does not end the game.
    pub fn claim_checkmate(&mut self, claimant: Color) -> Result<bool, RulesError> {
        self.ensure_in_progress()?;
        self.checkmate_claims.push(CheckmateClaim {
            claimant,
            move_index: self.board.move_count(),
            snapshot: self.board.to_state(),
        });
        Ok(self.board.is_checkmate(claimant.opponent()))
    }

    /// Challenge the most recent checkmate claim.
    ///
    /// The claim is judged against the current board. A false claim reveals
    /// every piece the claimant owns. A true claim ends the game in the
    /// claimant's favour: challenging a real mate loses outright. The
    /// challenger pays nothing beyond that.
    pub fn call_liar_on_checkmate(
        &mut self,
        _calling: Color,
    ) -> Result<LiarCallOutcome, RulesError> {
        self.ensure_in_progress()?;
        let claimant = self
            .checkmate_claims
            .last()
            .map(|claim| claim.claimant)
            .ok_or(RulesError::NoCheckmateClaimToChallenge)?;

        if self.board.is_checkmate(claimant.opponent()) {
            self.board.finish(claimant);
            Ok(LiarCallOutcome::Failed)
        } else {
            self.reveal_all_pieces(claimant);
            Ok(LiarCallOutcome::Successful)
        }
    }
}
