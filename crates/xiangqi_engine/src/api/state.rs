//! Position queries and AI move generation

use crate::board::Board;
use crate::error::EngineResult;
use crate::move_gen::{self, GameStatus};
use crate::search::{choose_move, Difficulty};
use crate::types::*;
use rand::Rng;

/// Get the AI's response to the current position
///
/// Returns `Ok(None)` when `player` has no legal move.
pub fn reply<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    history: &[Board],
    difficulty: Difficulty,
    rng: &mut R,
) -> EngineResult<Option<Move>> {
    choose_move(board, player, history, difficulty, rng)
}

/// Get the status of the position for the side to move
pub fn game_status(board: &Board, to_move: Player) -> GameStatus {
    move_gen::game_status(board, to_move)
}
