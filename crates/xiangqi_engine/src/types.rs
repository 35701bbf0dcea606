//! Core value types: coordinates, sides, pieces and moves
//!
//! Coordinates follow the screen layout of the board: `x` grows from file 0
//! to file 8, `y` grows from Black's back rank (0) down to Red's (9).

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinate
///
/// Values outside the board are representable so that callers can probe
/// arbitrary squares; [`Position::in_bounds`] tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_HEIGHT).contains(&self.y)
    }

    /// Shift by a delta without bounds checking
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Every square of the board, rank by rank
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_HEIGHT).flat_map(|y| (0..BOARD_WIDTH).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Direction of travel along y for this side's soldiers
    pub fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    pub fn in_palace(self, pos: Position) -> bool {
        if !(PALACE_MIN_X..=PALACE_MAX_X).contains(&pos.x) {
            return false;
        }
        match self {
            Player::Red => (RED_PALACE_MIN_Y..BOARD_HEIGHT).contains(&pos.y),
            Player::Black => (0..=BLACK_PALACE_MAX_Y).contains(&pos.y),
        }
    }

    /// Whether `pos` lies on the opponent's side of the river
    pub fn across_river(self, pos: Position) -> bool {
        match self {
            Player::Red => pos.y <= RIVER_Y,
            Player::Black => pos.y > RIVER_Y,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    /// Fixed material value
    pub fn value(self) -> i32 {
        match self {
            PieceKind::General => GENERAL_VALUE,
            PieceKind::Advisor => ADVISOR_VALUE,
            PieceKind::Elephant => ELEPHANT_VALUE,
            PieceKind::Horse => HORSE_VALUE,
            PieceKind::Chariot => CHARIOT_VALUE,
            PieceKind::Cannon => CANNON_VALUE,
            PieceKind::Soldier => SOLDIER_VALUE,
        }
    }

    /// Letter used in board diagrams, uppercase for Red
    pub fn letter(self, owner: Player) -> char {
        let c = match self {
            PieceKind::General => 'g',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 's',
        };
        match owner {
            Player::Red => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }
}

/// A piece on a particular board snapshot
///
/// `id` is assigned once at setup and survives every move; a moved piece in
/// a later snapshot is a new value carrying the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: u8,
    pub owner: Player,
    pub kind: PieceKind,
    pub position: Position,
}

impl Piece {
    pub const fn new(id: u8, owner: Player, kind: PieceKind, position: Position) -> Self {
        Self {
            id,
            owner,
            kind,
            position,
        }
    }

    /// Same piece, relocated
    pub fn moved_to(self, position: Position) -> Self {
        Self { position, ..self }
    }
}

/// Stateless move descriptor; captures are derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
