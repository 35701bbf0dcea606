//! Line movers: Chariot and Cannon
//!
//! Both slide along a file or rank. They differ only in how many pieces
//! may stand between origin and destination.

use crate::board::Board;
use crate::types::Position;

/// Straight slide over empty squares
pub(crate) fn is_valid_chariot_move(board: &Board, from: Position, to: Position) -> bool {
    board.count_between(from, to) == Some(0)
}

/// Straight slide over empty squares, or a capture over exactly one screen
pub(crate) fn is_valid_cannon_move(board: &Board, from: Position, to: Position, capturing: bool) -> bool {
    let screens = if capturing { 1 } else { 0 };
    board.count_between(from, to) == Some(screens)
}
