//! Capture context builder and facade
//!
//! Provides the fluent construction of a capture context and the entry
//! points used to capture, close and replay invocation chains.

pub mod core;
pub mod lambda;

pub use core::*;
pub use lambda::*;
