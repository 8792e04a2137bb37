//! Capture and replay error types
//!
//! Core error types surfaced by placeholder capture, chain registration and replay.

use crate::config::ConfigurationError;
use crate::model::TypeRef;
use crate::proxy::CaptureId;

/// Result type for capture and replay operations
pub type LambdaResult<T> = Result<T, LambdaError>;

/// Coarse classification of a [`LambdaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The capture could not be built for the requested type
    Capture,
    /// The API was used against its preconditions
    Usage,
    /// A recorded chain could not be applied to a concrete value
    Replay,
    /// Invalid configuration
    Configuration,
}

/// Errors raised while capturing, closing or replaying invocation chains
#[derive(Debug, Clone, thiserror::Error)]
pub enum LambdaError {
    #[error("cannot create a placeholder for type '{type_name}': {reason}")]
    UnsupportedSubjectType { type_name: String, reason: String },

    #[error("value of type '{type_name}' was not produced by this capture context")]
    NotAPlaceholder { type_name: String },

    #[error("capture {open} is still open on this thread; close it before starting another")]
    NestedCaptureNotClosed { open: CaptureId },

    #[error(
        "replay failed at step {step} ({method}): declared on '{declared_type}', \
         actual value is '{actual_type}': {reason}"
    )]
    ChainReplayError {
        step: usize,
        method: String,
        declared_type: String,
        actual_type: String,
        reason: String,
    },

    #[error("type '{type_name}' declares no method '{method}' taking {arity} argument(s)")]
    NoSuchMethod {
        type_name: String,
        method: String,
        arity: usize,
    },

    #[error("argument mismatch calling '{method}': {reason}")]
    ArgumentMismatch { method: String, reason: String },

    #[error("capture {capture} exceeded the maximum chain depth of {max_depth}")]
    ChainTooDeep { capture: CaptureId, max_depth: usize },

    #[error("placeholder at depth {depth} of capture {capture} is stale: the chain already has {recorded} step(s)")]
    StalePlaceholder {
        capture: CaptureId,
        depth: usize,
        recorded: usize,
    },

    #[error("cannot call '{method}' on a leaf value of type '{leaf_type}'")]
    LeafTerminated { leaf_type: TypeRef, method: String },

    #[error("capture {capture} is already closed")]
    CaptureClosed { capture: CaptureId },

    #[error("argument handle for capture {capture} is not registered here")]
    UnregisteredHandle { capture: CaptureId },

    #[error("values of type '{left}' and '{right}' have no natural ordering")]
    NotComparable { left: String, right: String },

    #[error("cannot convert a value of type '{actual}' into {expected}")]
    NotConvertible {
        expected: &'static str,
        actual: String,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl LambdaError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedSubjectType { .. } => ErrorKind::Capture,
            Self::NotAPlaceholder { .. }
            | Self::NestedCaptureNotClosed { .. }
            | Self::NoSuchMethod { .. }
            | Self::ArgumentMismatch { .. }
            | Self::ChainTooDeep { .. }
            | Self::StalePlaceholder { .. }
            | Self::LeafTerminated { .. }
            | Self::CaptureClosed { .. }
            | Self::UnregisteredHandle { .. } => ErrorKind::Usage,
            Self::ChainReplayError { .. }
            | Self::NotComparable { .. }
            | Self::NotConvertible { .. } => ErrorKind::Replay,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Whether the error points at a bug in the calling code
    #[must_use]
    pub fn is_programmer_error(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }
}

impl From<ConfigurationError> for LambdaError {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error.to_string())
    }
}

/// Errors a [`Subject`](crate::subject::Subject) reports when it cannot
/// perform a dispatched call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    #[error("'{type_name}' has no method '{method}'")]
    NoSuchMethod { type_name: String, method: String },

    #[error("argument {position} of '{method}': expected {expected}, got {actual}")]
    ArgumentMismatch {
        method: String,
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("{0}")]
    Failed(String),
}
