//! Error handling for capture, registration and replay
//!
//! Error types, constructors and classification shared by every component.

mod constructors;
mod types;

pub use types::{ErrorKind, InvokeError, LambdaError, LambdaResult};
