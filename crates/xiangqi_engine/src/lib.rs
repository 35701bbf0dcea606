//! Xiangqi rules, evaluation and move search
//!
//! The engine works on immutable [`Board`] snapshots: every query takes a
//! board by reference and every move produces a new board. Nothing here
//! spawns threads or touches the filesystem.
//!
//! ## Module Organization
//!
//! - `types` - squares, sides, pieces and moves
//! - `board` - board snapshots and the opening layout
//! - `move_gen` - movement rules, legality and check detection
//! - `evaluation` - static scoring
//! - `search` - minimax search and difficulty tiers
//! - `api` - game-level entry points

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use move_gen::GameStatus;
pub use search::{Difficulty, SearchOutcome, SearchParams, SearchProgress, Searcher};
pub use types::{Move, Piece, PieceKind, Player, Position};
