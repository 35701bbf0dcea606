//! Xiangqi engine host
//!
//! Wraps [`xiangqi_engine`] with what an application needs around it: a
//! background AI search ([`ai`]), settings persistence and logging setup
//! ([`core`]).

pub mod ai;
pub mod core;

pub use xiangqi_engine as engine;
