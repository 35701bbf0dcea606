//! Static position evaluation
//!
//! Scores are zero-sum integers from one side's point of view:
//!
//! - `material` - fixed piece values
//! - `position` - material plus the soldier advancement bonus

mod material;
mod position;

pub use material::evaluate_material;
pub use position::{evaluate, positional_bonus};
