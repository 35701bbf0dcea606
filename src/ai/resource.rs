//! Runtime AI configuration
//!
//! [`AiConfig`] decides when the computer should move and how strongly.
//! It is built from the persisted [`AiSettings`] and turns the current game
//! into a [`SearchRequest`].

use super::session::SearchRequest;
use crate::core::AiSettings;
use xiangqi_engine::{Board, Difficulty, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    /// Side controlled by the engine
    pub ai_player: Player,
    pub difficulty: Difficulty,
    pub reaction_chance: f64,
}

impl Default for AiConfig {
    /// AI plays Black at medium difficulty
    fn default() -> Self {
        AiSettings::default().into()
    }
}

impl From<AiSettings> for AiConfig {
    fn from(settings: AiSettings) -> Self {
        Self {
            ai_player: settings.ai_player,
            difficulty: settings.difficulty,
            reaction_chance: settings.reaction_chance,
        }
    }
}

impl AiConfig {
    pub fn is_ai_turn(&self, to_move: Player) -> bool {
        to_move == self.ai_player
    }

    /// The side the human plays
    pub fn human_player(&self) -> Player {
        self.ai_player.opponent()
    }

    /// Snapshot the game into a request for the AI side
    pub fn request(&self, board: &Board, history: &[Board]) -> SearchRequest {
        SearchRequest::new(board.clone(), self.ai_player, history.to_vec(), self.difficulty)
            .with_reaction_chance(self.reaction_chance)
    }
}
