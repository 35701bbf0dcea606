//! Game setup

use crate::board::Board;

/// Board in the standard opening layout
pub fn new_game() -> Board {
    Board::standard()
}
