//! Core module - application infrastructure
//!
//! - `error` - [`CoreError`] and [`CoreResult`]
//! - `logging` - tracing subscriber setup
//! - `settings` - [`AiSettings`] persistence as JSON

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{load_settings, save_settings, settings_path, AiSettings, DEFAULT_REACTION_CHANCE};
