//! Board model
//!
//! A board is the list of live pieces; captured pieces are simply absent.
//! Boards are never mutated in place by the engine: advancing the game
//! produces a new snapshot.

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Serialized as the bare piece list; deserializing goes through [`Board::new`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct Board {
    pieces: Vec<Piece>,
}

impl TryFrom<Vec<Piece>> for Board {
    type Error = EngineError;

    fn try_from(pieces: Vec<Piece>) -> EngineResult<Self> {
        Board::new(pieces)
    }
}

impl From<Board> for Vec<Piece> {
    fn from(board: Board) -> Self {
        board.pieces
    }
}

impl Board {
    /// Build a board, checking the structural invariants
    ///
    /// Rejects out-of-bounds pieces, duplicated ids or squares, and a
    /// second General for either side. A side without a General is
    /// accepted: that side has already lost.
    pub fn new(pieces: Vec<Piece>) -> EngineResult<Self> {
        let mut ids = HashSet::new();
        let mut squares = HashSet::new();
        let mut generals = HashSet::new();

        for piece in &pieces {
            if !piece.position.in_bounds() {
                return Err(EngineError::OutOfBounds {
                    id: piece.id,
                    position: piece.position,
                });
            }
            if !ids.insert(piece.id) {
                return Err(EngineError::DuplicateId { id: piece.id });
            }
            if !squares.insert(piece.position) {
                return Err(EngineError::DuplicateSquare {
                    position: piece.position,
                });
            }
            if piece.kind == PieceKind::General && !generals.insert(piece.owner) {
                return Err(EngineError::DuplicateGeneral {
                    player: piece.owner,
                });
            }
        }

        Ok(Self { pieces })
    }

    /// Standard opening layout, ids 0-15 for Black and 16-31 for Red
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 9] = [
            PieceKind::Chariot,
            PieceKind::Horse,
            PieceKind::Elephant,
            PieceKind::Advisor,
            PieceKind::General,
            PieceKind::Advisor,
            PieceKind::Elephant,
            PieceKind::Horse,
            PieceKind::Chariot,
        ];

        let mut pieces = Vec::with_capacity(32);
        for (owner, back, cannons, soldiers) in [(Player::Black, 0, 2, 3), (Player::Red, 9, 7, 6)] {
            for (x, kind) in BACK_RANK.iter().enumerate() {
                pieces.push((owner, *kind, Position::new(x as i8, back)));
            }
            for x in [1, 7] {
                pieces.push((owner, PieceKind::Cannon, Position::new(x, cannons)));
            }
            for x in (0..BOARD_WIDTH).step_by(2) {
                pieces.push((owner, PieceKind::Soldier, Position::new(x, soldiers)));
            }
        }

        let pieces = pieces
            .into_iter()
            .enumerate()
            .map(|(id, (owner, kind, position))| Piece::new(id as u8, owner, kind, position))
            .collect();

        Self { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.owner == player)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == pos)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.piece_at(pos).is_some()
    }

    pub fn piece_by_id(&self, id: u8) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn find(&self, predicate: impl Fn(&Piece) -> bool) -> Option<&Piece> {
        self.pieces.iter().find(|p| predicate(p))
    }

    pub fn general(&self, player: Player) -> Option<&Piece> {
        self.find(|p| p.owner == player && p.kind == PieceKind::General)
    }

    /// Whether this exact piece value lives on the board
    pub fn contains(&self, piece: &Piece) -> bool {
        self.piece_by_id(piece.id) == Some(piece)
    }

    /// Number of pieces strictly between two squares on a shared file or rank
    ///
    /// Returns `None` when the squares are not aligned or are equal.
    pub fn count_between(&self, from: Position, to: Position) -> Option<usize> {
        if from == to {
            return None;
        }
        if from.x == to.x {
            let (lo, hi) = (from.y.min(to.y), from.y.max(to.y));
            Some(
                self.pieces
                    .iter()
                    .filter(|p| p.position.x == from.x && p.position.y > lo && p.position.y < hi)
                    .count(),
            )
        } else if from.y == to.y {
            let (lo, hi) = (from.x.min(to.x), from.x.max(to.x));
            Some(
                self.pieces
                    .iter()
                    .filter(|p| p.position.y == from.y && p.position.x > lo && p.position.x < hi)
                    .count(),
            )
        } else {
            None
        }
    }

    /// Snapshot after moving the piece with `id` to `to`
    ///
    /// Whatever stood on `to` is removed. No legality checking: the
    /// legality engine uses this to simulate candidate moves.
    pub fn with_piece_moved(&self, id: u8, to: Position) -> Self {
        let pieces = self
            .pieces
            .iter()
            .filter(|p| p.position != to || p.id == id)
            .map(|p| if p.id == id { p.moved_to(to) } else { *p })
            .collect();
        Self { pieces }
    }

    /// Snapshot after playing `mv`, or `None` if `mv.from` is empty
    pub fn after_move(&self, mv: Move) -> Option<Self> {
        let mover = self.piece_at(mv.from)?;
        Some(self.with_piece_moved(mover.id, mv.to))
    }

    /// Canonical state string used for repetition detection
    ///
    /// Pieces sorted by id, rendered as `id@x,y` and joined by `;`.
    pub fn state_key(&self) -> String {
        let mut sorted: Vec<&Piece> = self.pieces.iter().collect();
        sorted.sort_by_key(|p| p.id);
        sorted
            .iter()
            .map(|p| format!("{}@{},{}", p.id, p.position.x, p.position.y))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            write!(f, "{y} ")?;
            for x in 0..BOARD_WIDTH {
                match self.piece_at(Position::new(x, y)) {
                    Some(piece) => write!(f, " {}", piece.kind.letter(piece.owner))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..BOARD_WIDTH {
            write!(f, " {x}")?;
        }
        writeln!(f)
    }
}
