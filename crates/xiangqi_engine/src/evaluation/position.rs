//! Full position evaluation
//!
//! Material plus a positional bonus. Only soldiers earn one: advancing
//! across the river is worth more than holding the central files. Every
//! other kind scores its material value alone.

use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Positional bonus for a single piece
pub fn positional_bonus(piece: &Piece) -> i32 {
    if piece.kind != PieceKind::Soldier {
        return 0;
    }
    if piece.owner.across_river(piece.position) {
        SOLDIER_CROSSED_BONUS
    } else if (PALACE_MIN_X..=PALACE_MAX_X).contains(&piece.position.x) {
        SOLDIER_CENTER_BONUS
    } else {
        0
    }
}

/// Evaluate the board from `perspective`'s side
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    board
        .pieces()
        .iter()
        .map(|p| {
            let value = p.kind.value() + positional_bonus(p);
            if p.owner == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}
