//! Legal move generation
//!
//! A move is legal when it is pseudo-legal and the resulting board does
//! not leave the mover's own General in check.

use super::attack::is_in_check;
use super::is_pseudo_legal;
use crate::board::Board;
use crate::types::*;
use std::collections::BTreeSet;

/// Every legal destination for `piece`
///
/// Pieces that are not on `board` have no legal destinations. The set is
/// ordered, so repeated calls on the same board compare equal.
pub fn get_valid_moves(board: &Board, piece: &Piece) -> BTreeSet<Position> {
    Position::all()
        .filter(|&to| is_pseudo_legal(board, piece, to))
        .filter(|&to| {
            let next = board.with_piece_moved(piece.id, to);
            !is_in_check(&next, piece.owner)
        })
        .collect()
}

/// All legal moves for `player`, in board order then destination order
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces_of(player) {
        moves.extend(
            get_valid_moves(board, piece)
                .into_iter()
                .map(|to| Move::new(piece.position, to)),
        );
    }
    moves
}

/// Check if `player` may legally play `mv`
pub fn is_legal_move(board: &Board, mv: Move, player: Player) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    if piece.owner != player || !is_pseudo_legal(board, piece, mv.to) {
        return false;
    }

    let next = board.with_piece_moved(piece.id, mv.to);
    !is_in_check(&next, player)
}
