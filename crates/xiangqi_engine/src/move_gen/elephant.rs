//! Elephant movement

use super::distance;
use crate::board::Board;
use crate::types::{Player, Position};

/// Exact 2-2 diagonal on the elephant's own side, with an empty eye
pub(crate) fn is_valid_elephant_move(board: &Board, owner: Player, from: Position, to: Position) -> bool {
    if owner.across_river(to) {
        return false;
    }

    let (dx, dy) = distance(from, to);
    if dx != 2 || dy != 2 {
        return false;
    }

    let eye = Position::new((from.x + to.x) / 2, (from.y + to.y) / 2);
    !board.is_occupied(eye)
}
