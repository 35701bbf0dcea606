//! Horse movement

use super::distance;
use crate::board::Board;
use crate::types::Position;

/// L-shaped jump, blocked when the square next to the origin along the
/// long leg is occupied
pub(crate) fn is_valid_horse_move(board: &Board, from: Position, to: Position) -> bool {
    let (dx, dy) = distance(from, to);
    if !((dx == 1 && dy == 2) || (dx == 2 && dy == 1)) {
        return false;
    }

    let hobble = if dx == 2 {
        from.offset((to.x - from.x) / 2, 0)
    } else {
        from.offset(0, (to.y - from.y) / 2)
    };
    !board.is_occupied(hobble)
}
