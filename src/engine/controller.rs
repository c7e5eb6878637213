//! Game controller implementation.

use std::collections::BTreeMap;

use crate::board::{Board, Color, PieceType, Square, StateError};
use crate::deception::{
    DeceptionLayer, GameState, LiarCallOutcome, MoveReport, OptionError, RulesConfig, RulesError,
    VisibleBoard,
};

use super::GameStatus;

/// Owns one game and takes submissions on behalf of either player.
///
/// Each call runs to completion; hosts sharing a controller across
/// threads should go through [`SharedGame`](super::SharedGame).
#[derive(Clone, Debug, Default)]
pub struct GameController {
    game: DeceptionLayer,
}

impl GameController {
    /// A new game from the starting position with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        GameController {
            game: DeceptionLayer::with_board(Board::new(), config),
        }
    }

    /// Start from a set-up position.
    #[must_use]
    pub fn from_position(board: Board, config: RulesConfig) -> Self {
        GameController {
            game: DeceptionLayer::with_board(board, config),
        }
    }

    /// Read-only access to the full game, hidden information included.
    #[must_use]
    pub fn game(&self) -> &DeceptionLayer {
        &self.game
    }

    /// Reset to the starting position, keeping the current rules.
    pub fn new_game(&mut self) {
        engine_debug!("new game");
        self.game = DeceptionLayer::with_board(Board::new(), self.game.config());
    }

    /// Set a rules option by name; takes effect immediately.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let mut config = self.game.config();
        config.apply_option(name, value)?;
        engine_debug!("option {name} = {value}");
        self.game.set_config(config);
        Ok(())
    }

    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        claimed: PieceType,
        color: Color,
    ) -> Result<MoveReport, RulesError> {
        let result = self.game.make_deceptive_move(from, to, claimed, color);
        match &result {
            Ok(report) => {
                engine_debug!("{color} played {from}{to} as {claimed}");
                if report.checkmate {
                    engine_debug!("{color} wins by checkmate");
                }
            }
            Err(err) => engine_debug!("{color} move {from}{to} rejected: {err}"),
        }
        result
    }

    pub fn submit_liar_call(&mut self, color: Color) -> Result<LiarCallOutcome, RulesError> {
        let result = self.game.call_liar(color);
        match &result {
            Ok(outcome) => engine_debug!("{color} called liar: {outcome}"),
            Err(err) => engine_debug!("{color} liar call rejected: {err}"),
        }
        result
    }

    /// Record a checkmate claim. The result says whether it holds right now.
    pub fn submit_checkmate_claim(&mut self, color: Color) -> Result<bool, RulesError> {
        let result = self.game.claim_checkmate(color);
        engine_debug!("{color} claims checkmate: {result:?}");
        result
    }

    pub fn submit_liar_call_on_checkmate(
        &mut self,
        color: Color,
    ) -> Result<LiarCallOutcome, RulesError> {
        let result = self.game.call_liar_on_checkmate(color);
        match &result {
            Ok(LiarCallOutcome::Failed) => {
                engine_debug!("{color} challenged a true checkmate and lost");
            }
            Ok(LiarCallOutcome::Successful) => {
                engine_debug!("{color} exposed a false checkmate claim");
            }
            Err(err) => engine_debug!("{color} checkmate challenge rejected: {err}"),
        }
        result
    }

    #[must_use]
    pub fn get_visible_board(&self, viewer: Color) -> VisibleBoard {
        self.game.visible_board(viewer)
    }

    #[must_use]
    pub fn get_status(&self, viewer: Color) -> GameStatus {
        GameStatus::for_viewer(&self.game, viewer)
    }

    #[must_use]
    pub fn export_state(&self) -> GameState {
        engine_trace!("exporting state at move {}", self.game.board().move_count());
        self.game.export_state()
    }

    /// Replace the game with an exported one. On error the running game is
    /// left untouched.
    ///
    /// Rules are not stored in a `GameState`: the imported game is played
    /// under this controller's current `RulesConfig`. Hosts that vary the
    /// rules per game must persist the config alongside the state and
    /// restore it with `with_config` or `set_option` before importing.
    pub fn import_state(&mut self, state: &GameState) -> Result<(), StateError> {
        match DeceptionLayer::from_state(state, self.game.config()) {
            Ok(game) => {
                engine_debug!("imported state at move {}", game.board().move_count());
                self.game = game;
                Ok(())
            }
            Err(err) => {
                engine_debug!("import rejected: {err}");
                Err(err)
            }
        }
    }

    /// Per-type destinations for the piece on `from`, for building a UI.
    pub fn move_options(&mut self, from: Square, color: Color) -> BTreeMap<PieceType, Vec<Square>> {
        self.game.move_options(from, color)
    }

    pub fn declarable_types(&mut self, from: Square, to: Square, color: Color) -> Vec<PieceType> {
        self.game.declarable_types(from, to, color)
    }

    pub fn movable_pieces(&mut self, color: Color) -> Vec<Square> {
        self.game.movable_pieces(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deception::VisibleSquare;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_controller_round_of_play() {
        let mut controller = GameController::new();
        controller
            .submit_move(sq("g1"), sq("f3"), PieceType::Knight, Color::White)
            .unwrap();
        assert!(controller.get_status(Color::Black).can_call_liar);
        assert_eq!(
            controller.submit_liar_call(Color::Black),
            Ok(LiarCallOutcome::Failed)
        );
        assert_eq!(controller.get_status(Color::Black).turn_penalty, 1);
        assert_eq!(
            controller.submit_liar_call(Color::Black),
            Err(RulesError::NoLiarCallAvailable)
        );
    }

    #[test]
    fn test_set_option() {
        let mut controller = GameController::new();
        controller.set_option("Failed-Call-Penalty", "3").unwrap();
        assert_eq!(controller.game().config().failed_call_penalty, 3);
        assert!(controller.set_option("clock", "5").is_err());
        assert!(controller.set_option("enforce_turn_order", "maybe").is_err());
    }

    #[test]
    fn test_import_failure_keeps_game() {
        let mut controller = GameController::new();
        controller
            .submit_move(sq("e2"), sq("e4"), PieceType::Pawn, Color::White)
            .unwrap();
        let before = controller.export_state();

        let mut bad = before.clone();
        bad.deception.revealed.push(Square(8, 0));
        assert!(controller.import_state(&bad).is_err());
        assert_eq!(controller.export_state(), before);
    }

    #[test]
    fn test_import_keeps_current_rules() {
        let state = GameController::new().export_state();
        let mut controller =
            GameController::with_config(RulesConfig::default().failed_call_penalty(4));
        controller.import_state(&state).unwrap();
        assert_eq!(controller.game().config().failed_call_penalty, 4);
    }

    #[test]
    fn test_new_game_resets_position() {
        let mut controller = GameController::new();
        controller
            .submit_move(sq("e2"), sq("e4"), PieceType::Rook, Color::White)
            .unwrap();
        controller.new_game();
        assert_eq!(controller.game().board(), &Board::new());
        assert_eq!(
            controller.get_visible_board(Color::White).at(sq("e2")),
            VisibleSquare::Known {
                kind: PieceType::Pawn,
                color: Color::White
            }
        );
    }

    #[test]
    fn test_declarable_types_through_controller() {
        let mut controller = GameController::new();
        assert_eq!(
            controller.declarable_types(sq("b1"), sq("c3"), Color::White),
            vec![PieceType::Knight]
        );
        assert_eq!(controller.movable_pieces(Color::White).len(), 16);
        assert_eq!(controller.move_options(sq("b1"), Color::White).len(), 1);
    }
}
