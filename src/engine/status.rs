//! Per-player status report.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, PieceType, Square};
use crate::deception::DeceptionLayer;

/// The opponent's last move as its mover declared it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSummary {
    pub from: Square,
    pub to: Square,
    pub claimed: PieceType,
}

impl fmt::Display for MoveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Opponent moved from {} to {} as {}",
            self.from, self.to, self.claimed
        )
    }
}

/// What one player is told about the game between moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStatus {
    pub viewer: Color,
    pub current_turn: Color,
    /// The viewer's king is attacked
    pub in_check: bool,
    /// A liar call is open and the viewer is on move
    pub can_call_liar: bool,
    /// Turns the viewer still has to skip
    pub turn_penalty: u32,
    pub game_over: bool,
    pub winner: Option<Color>,
    /// Present only when the opponent made the last move
    pub last_move_summary: Option<MoveSummary>,
}

impl GameStatus {
    pub(crate) fn for_viewer(game: &DeceptionLayer, viewer: Color) -> Self {
        let last_move_summary = game
            .last_move()
            .filter(|last| last.acting_color != viewer)
            .map(|last| MoveSummary {
                from: last.from,
                to: last.to,
                claimed: last.claimed,
            });

        GameStatus {
            viewer,
            current_turn: game.current_turn(),
            in_check: game.is_in_check(viewer),
            can_call_liar: game.liar_call_available() && game.current_turn() == viewer,
            turn_penalty: game.turn_penalty(viewer),
            game_over: game.is_game_over(),
            winner: game.winner(),
            last_move_summary,
        }
    }

    /// Whether the viewer is the side on move.
    #[must_use]
    pub fn is_viewer_turn(&self) -> bool {
        self.current_turn == self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_fresh_game_status() {
        let game = DeceptionLayer::new();
        let status = GameStatus::for_viewer(&game, Color::White);
        assert!(status.is_viewer_turn());
        assert!(!status.in_check);
        assert!(!status.can_call_liar);
        assert_eq!(status.turn_penalty, 0);
        assert!(!status.game_over);
        assert_eq!(status.winner, None);
        assert_eq!(status.last_move_summary, None);
    }

    #[test]
    fn test_summary_only_for_opponent() {
        let mut game = DeceptionLayer::new();
        game.make_deceptive_move(sq("e2"), sq("e4"), PieceType::Queen, Color::White)
            .unwrap();

        let mover = GameStatus::for_viewer(&game, Color::White);
        assert_eq!(mover.last_move_summary, None);
        assert!(!mover.can_call_liar);

        let opponent = GameStatus::for_viewer(&game, Color::Black);
        assert!(opponent.can_call_liar);
        let summary = opponent.last_move_summary.unwrap();
        assert_eq!(summary.claimed, PieceType::Queen);
        assert_eq!(summary.to_string(), "Opponent moved from e2 to e4 as queen");
    }
}
