//! Computer opponent
//!
//! The engine search runs on a worker thread so callers stay responsive.
//!
//! # Architecture
//!
//! - [`AiConfig`]: which side the AI plays and how strongly
//! - [`SearchSession`]: one background search streaming [`SearchEvent`]s
//! - [`SearchHost`]: keeps the single live session, superseding stale ones
//! - [`Reaction`]: cosmetic marker attached to finished moves
//!
//! # Flow
//!
//! 1. Snapshot the board and history into a [`SearchRequest`]
//! 2. Hand it to [`SearchHost::request`]
//! 3. Poll with [`SearchHost::poll`] until a terminal event arrives
//! 4. Apply the move with `xiangqi_engine::api::apply_move`

pub mod error;
pub mod host;
pub mod reaction;
pub mod resource;
pub mod session;

pub use error::{AiError, AiResult};
pub use host::SearchHost;
pub use reaction::{pick_reaction, Reaction};
pub use resource::AiConfig;
pub use session::{AiFailure, AiMove, SearchEvent, SearchRequest, SearchSession};
