//! Error types for the xiangqi engine
//!
//! Query functions (legality, check detection) never fail: they answer
//! `false` for malformed input. Errors are reserved for operations that
//! build or advance a board, and for searches that were told to stop.

use crate::types::{Player, Position};
use thiserror::Error;

/// Errors that can occur in the xiangqi engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A piece was placed outside the 9x10 grid
    #[error("Piece {id} placed out of bounds at {position}")]
    OutOfBounds { id: u8, position: Position },

    /// Two pieces share an id
    #[error("Duplicate piece id {id}")]
    DuplicateId { id: u8 },

    /// Two pieces share a square
    #[error("Square {position} is occupied twice")]
    DuplicateSquare { position: Position },

    /// A side has more than one General
    #[error("{player} has more than one General")]
    DuplicateGeneral { player: Player },

    /// No piece at source square
    #[error("No piece at source square {position}")]
    NoPieceAt { position: Position },

    /// Piece does not belong to the side making the move
    #[error("Piece at {position} does not belong to {player}")]
    WrongPlayer { position: Position, player: Player },

    /// Move rejected by the legality engine
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// Search stopped through its stop flag before finishing
    #[error("Search aborted before completion")]
    SearchAborted,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
