//! Soldier movement

use super::distance;
use crate::types::{Player, Position};

/// One step forward; once across the river, one step sideways as well
pub(crate) fn is_valid_soldier_move(owner: Player, from: Position, to: Position) -> bool {
    let (dx, dy) = distance(from, to);
    let forward = dx == 0 && to.y - from.y == owner.forward();
    let sideways = dy == 0 && dx == 1;

    forward || (sideways && owner.across_river(from))
}
