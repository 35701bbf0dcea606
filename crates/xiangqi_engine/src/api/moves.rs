//! Move execution and validation

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::move_gen;
use crate::types::*;

/// Play `mv` for `player` and return the resulting board
///
/// The input board is left untouched. A capture removes the target piece;
/// the mover keeps its id.
///
/// # Errors
///
/// - [`EngineError::NoPieceAt`] if `mv.from` is empty
/// - [`EngineError::WrongPlayer`] if the piece belongs to the other side
/// - [`EngineError::IllegalMove`] if the move breaks a movement rule or
///   leaves `player`'s General in check
pub fn apply_move(board: &Board, mv: Move, player: Player) -> EngineResult<Board> {
    let piece = board
        .piece_at(mv.from)
        .ok_or(EngineError::NoPieceAt { position: mv.from })?;

    if piece.owner != player {
        return Err(EngineError::WrongPlayer {
            position: mv.from,
            player,
        });
    }

    if !move_gen::is_legal_move(board, mv, player) {
        return Err(EngineError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    Ok(board.with_piece_moved(piece.id, mv.to))
}

/// Check if `player` may play `mv` on `board`
pub fn is_legal_move(board: &Board, mv: Move, player: Player) -> bool {
    move_gen::is_legal_move(board, mv, player)
}
