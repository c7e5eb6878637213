//! Random play, for smoke tests and benchmarks.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::board::{Color, PieceType, Square};

use super::GameController;

/// Pick a random declared move for `color`: a movable piece, one of its
/// reachable squares, and one of the types that could be declared for it.
///
/// `None` when `color` has nothing it could declare.
pub fn random_move<R: Rng + ?Sized>(
    controller: &mut GameController,
    color: Color,
    rng: &mut R,
) -> Option<(Square, Square, PieceType)> {
    let from = *controller.movable_pieces(color).choose(rng)?;
    let to = controller
        .move_options(from, color)
        .into_values()
        .flatten()
        .choose(rng)?;
    let claimed = *controller.declarable_types(from, to, color).choose(rng)?;
    Some((from, to, claimed))
}
