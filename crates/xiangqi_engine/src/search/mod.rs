//! Move search for the computer player
//!
//! - `difficulty` - strength tiers and their depths
//! - `minimax` - alpha-beta search below the root
//! - `root` - candidate scoring, repetition avoidance and check bonus

mod difficulty;
mod minimax;
mod root;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use root::{SearchOutcome, SearchParams, SearchProgress, Searcher};

use crate::board::Board;
use crate::error::EngineResult;
use crate::types::{Move, Player};
use rand::Rng;

/// Best move for `player` at `difficulty`, or `None` when it has none
///
/// `history` holds earlier positions of the game; moves that recreate one
/// of them are penalized.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    history: &[Board],
    difficulty: Difficulty,
    rng: &mut R,
) -> EngineResult<Option<Move>> {
    let outcome = Searcher::new(SearchParams::for_difficulty(difficulty)).choose_move(board, player, history, rng, |_| {})?;
    Ok(outcome.map(|o| o.mv))
}

/// A quick suggestion for a human player
///
/// Searches at the easiest depth and ignores `history`.
pub fn hint_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    history: &[Board],
    rng: &mut R,
) -> EngineResult<Option<Move>> {
    let outcome = Searcher::new(SearchParams::hint()).choose_move(board, player, history, rng, |_| {})?;
    Ok(outcome.map(|o| o.mv))
}
