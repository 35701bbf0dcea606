//! Check, checkmate and stalemate detection

use super::is_pseudo_legal;
use super::legal::get_valid_moves;
use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Situation of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    /// No legal move while not in check; the side to move loses
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Both Generals on one file or rank with nothing between them
pub fn generals_facing(board: &Board) -> bool {
    let (Some(red), Some(black)) = (board.general(Player::Red), board.general(Player::Black)) else {
        return false;
    };
    board.count_between(red.position, black.position) == Some(0)
}

/// Check if `player`'s General is attacked
///
/// A side without a General is never in check. Facing Generals count as
/// check for both sides.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    let Some(general) = board.general(player) else {
        return false;
    };

    let attacked = board
        .pieces_of(player.opponent())
        .any(|piece| is_pseudo_legal(board, piece, general.position));

    attacked || generals_facing(board)
}

pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|piece| !get_valid_moves(board, piece).is_empty())
}

/// In check with no legal move
pub fn is_checkmate(board: &Board, player: Player) -> bool {
    is_in_check(board, player) && !has_any_legal_move(board, player)
}

/// Not in check, yet no legal move
pub fn is_stalemate(board: &Board, player: Player) -> bool {
    !is_in_check(board, player) && !has_any_legal_move(board, player)
}

/// Classify the position for the side to move
pub fn game_status(board: &Board, to_move: Player) -> GameStatus {
    let in_check = is_in_check(board, to_move);
    let has_moves = has_any_legal_move(board, to_move);

    match (in_check, has_moves) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}
