//! Material evaluation
//!
//! Sums fixed piece values, positive for `perspective`'s pieces.

use crate::board::Board;
use crate::types::*;

/// Evaluate material balance
pub fn evaluate_material(board: &Board, perspective: Player) -> i32 {
    board
        .pieces()
        .iter()
        .map(|p| {
            let value = p.kind.value();
            if p.owner == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHARIOT_VALUE, SOLDIER_VALUE};

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::standard();
        assert_eq!(evaluate_material(&board, Player::Red), 0);
        assert_eq!(evaluate_material(&board, Player::Black), 0);
    }

    #[test]
    fn test_red_up_chariot() {
        let board = Board::standard();
        let black_chariot = board.piece_at(Position::new(0, 0)).unwrap().id;
        let pieces = board.pieces().iter().copied().filter(|p| p.id != black_chariot).collect();
        let board = Board::new(pieces).unwrap();

        assert_eq!(evaluate_material(&board, Player::Red), CHARIOT_VALUE);
        assert_eq!(evaluate_material(&board, Player::Black), -CHARIOT_VALUE);
    }

    #[test]
    fn test_black_up_soldier() {
        let board = Board::standard();
        let red_soldier = board.piece_at(Position::new(4, 6)).unwrap().id;
        let pieces = board.pieces().iter().copied().filter(|p| p.id != red_soldier).collect();
        let board = Board::new(pieces).unwrap();

        assert_eq!(evaluate_material(&board, Player::Black), SOLDIER_VALUE);
    }

    #[test]
    fn test_empty_board_material() {
        assert_eq!(evaluate_material(&Board::default(), Player::Red), 0);
    }
}
