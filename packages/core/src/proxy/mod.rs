//! Placeholder generation and invocation recording
//!
//! The factory hands out a root [`Placeholder`] per capture; each intercepted
//! call appends a step to the capture and returns either a new placeholder of
//! the declared return type or a [`LeafCapture`] holding a fixed default.

pub mod capture;
pub mod factory;
pub mod placeholder;

pub use capture::{CaptureId, open_capture};
pub use factory::{Classification, PlaceholderFactory};
pub use placeholder::{Captured, LeafCapture, Placeholder};
