//! Replay engine
//!
//! Pure, reentrant evaluation of a closed chain against a root value.

pub mod engine;
pub mod outcome;

pub use engine::ReplayEngine;
pub use outcome::ReplayOutcome;
