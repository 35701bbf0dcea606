//! Public API for the xiangqi engine
//!
//! Thin wrappers for callers that only need to run a game:
//!
//! - `game` - Game setup (new_game)
//! - `moves` - Move execution and validation (apply_move, is_legal_move)
//! - `state` - Position queries and AI (game_status, reply)

mod game;
mod moves;
mod state;

pub use game::new_game;
pub use moves::{apply_move, is_legal_move};
pub use state::{game_status, reply};
