//! Cosmetic reactions attached to AI moves

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A flavor marker shown next to an AI move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    Laughing,
    HeartEyes,
    Thinking,
    Crying,
    Angry,
    ThumbsUp,
    Fire,
    MindBlown,
    FacePalm,
    Shush,
    Wink,
    Clown,
    Angel,
    Devil,
}

impl Reaction {
    pub const ALL: [Reaction; 14] = [
        Reaction::Laughing,
        Reaction::HeartEyes,
        Reaction::Thinking,
        Reaction::Crying,
        Reaction::Angry,
        Reaction::ThumbsUp,
        Reaction::Fire,
        Reaction::MindBlown,
        Reaction::FacePalm,
        Reaction::Shush,
        Reaction::Wink,
        Reaction::Clown,
        Reaction::Angel,
        Reaction::Devil,
    ];

    pub fn glyph(self) -> char {
        match self {
            Reaction::Laughing => '\u{1F602}',
            Reaction::HeartEyes => '\u{1F60D}',
            Reaction::Thinking => '\u{1F914}',
            Reaction::Crying => '\u{1F62D}',
            Reaction::Angry => '\u{1F621}',
            Reaction::ThumbsUp => '\u{1F44D}',
            Reaction::Fire => '\u{1F525}',
            Reaction::MindBlown => '\u{1F92F}',
            Reaction::FacePalm => '\u{1F926}',
            Reaction::Shush => '\u{1F92B}',
            Reaction::Wink => '\u{1F609}',
            Reaction::Clown => '\u{1F921}',
            Reaction::Angel => '\u{1F607}',
            Reaction::Devil => '\u{1F608}',
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Reaction for a chosen move
///
/// Checking moves always get [`Reaction::Fire`]. Other moves get a random
/// reaction with probability `chance`.
pub fn pick_reaction<R: Rng + ?Sized>(gives_check: bool, chance: f64, rng: &mut R) -> Option<Reaction> {
    if gives_check {
        return Some(Reaction::Fire);
    }
    if chance.is_nan() || chance <= 0.0 || !rng.random_bool(chance.min(1.0)) {
        return None;
    }
    Reaction::ALL.choose(rng).copied()
}
