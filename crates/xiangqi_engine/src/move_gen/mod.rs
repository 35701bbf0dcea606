//! Move legality for xiangqi pieces
//!
//! Pseudo-legality is decided per piece family:
//!
//! - `palace` - General and Advisor, confined to the 3x3 palace
//! - `elephant` - 2-2 diagonals on its own side, blocked by the eye
//! - `horse` - L-shaped jumps, blocked at the hobbling point
//! - `sliding` - Chariot and Cannon line moves with screen counting
//! - `soldier` - forward steps, sideways once across the river
//!
//! `legal` filters out moves that leave the mover's General in check and
//! `attack` answers check, checkmate and stalemate queries.

mod attack;
mod elephant;
mod horse;
mod legal;
mod palace;
mod sliding;
mod soldier;


pub use attack::{game_status, generals_facing, has_any_legal_move, is_checkmate, is_in_check, is_stalemate, GameStatus};
pub use legal::{get_valid_moves, is_legal_move, legal_moves};

use crate::board::Board;
use crate::types::*;

/// Check whether `piece` may move to `to`, ignoring self-check
///
/// Fails closed: a piece that is not on `board`, a destination off the
/// board, or a destination held by a friendly piece all answer `false`.
pub fn is_pseudo_legal(board: &Board, piece: &Piece, to: Position) -> bool {
    if !to.in_bounds() || !board.contains(piece) {
        return false;
    }

    let target = board.piece_at(to);
    if let Some(target) = target {
        if target.owner == piece.owner {
            return false;
        }
    }

    let from = piece.position;
    match piece.kind {
        PieceKind::General => palace::is_valid_general_move(piece.owner, from, to),
        PieceKind::Advisor => palace::is_valid_advisor_move(piece.owner, from, to),
        PieceKind::Elephant => elephant::is_valid_elephant_move(board, piece.owner, from, to),
        PieceKind::Horse => horse::is_valid_horse_move(board, from, to),
        PieceKind::Chariot => sliding::is_valid_chariot_move(board, from, to),
        PieceKind::Cannon => sliding::is_valid_cannon_move(board, from, to, target.is_some()),
        PieceKind::Soldier => soldier::is_valid_soldier_move(piece.owner, from, to),
    }
}

/// Every square `piece` could reach before the self-check filter
pub fn pseudo_legal_destinations(board: &Board, piece: &Piece) -> Vec<Position> {
    Position::all()
        .filter(|&to| is_pseudo_legal(board, piece, to))
        .collect()
}

/// Absolute file and rank distance between two squares
pub(crate) fn distance(from: Position, to: Position) -> (i8, i8) {
    ((to.x - from.x).abs(), (to.y - from.y).abs())
}
