//! General and Advisor movement, both confined to the palace

use super::distance;
use crate::types::{Player, Position};

/// One orthogonal step inside the palace
pub(crate) fn is_valid_general_move(owner: Player, from: Position, to: Position) -> bool {
    let (dx, dy) = distance(from, to);
    owner.in_palace(to) && dx + dy == 1
}

/// One diagonal step inside the palace
pub(crate) fn is_valid_advisor_move(owner: Player, from: Position, to: Position) -> bool {
    let (dx, dy) = distance(from, to);
    owner.in_palace(to) && dx == 1 && dy == 1
}
