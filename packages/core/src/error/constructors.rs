//! Error constructor functions
//!
//! Factory methods that build [`LambdaError`] values with consistent context.

use super::types::{InvokeError, LambdaError};
use crate::model::{InvocationStep, TypeRef};
use crate::proxy::CaptureId;

impl LambdaError {
    pub fn unsupported_subject(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedSubjectType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn not_a_placeholder(type_name: impl Into<String>) -> Self {
        Self::NotAPlaceholder {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn nested_capture(open: CaptureId) -> Self {
        Self::NestedCaptureNotClosed { open }
    }

    /// Creates a replay error for the step at `step`
    ///
    /// # Arguments
    /// * `step` - Zero-based index of the failing step
    /// * `invocation` - The recorded step that failed
    /// * `actual_type` - Runtime type of the value the step was applied to
    /// * `reason` - Why the step could not be applied
    pub fn chain_replay(
        step: usize,
        invocation: &InvocationStep,
        actual_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ChainReplayError {
            step,
            method: invocation.method_name().to_string(),
            declared_type: invocation.declaring_type().to_string(),
            actual_type: actual_type.into(),
            reason: reason.into(),
        }
    }

    pub fn no_such_method(type_name: impl Into<String>, method: impl Into<String>, arity: usize) -> Self {
        Self::NoSuchMethod {
            type_name: type_name.into(),
            method: method.into(),
            arity,
        }
    }

    pub fn argument_mismatch(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArgumentMismatch {
            method: method.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn chain_too_deep(capture: CaptureId, max_depth: usize) -> Self {
        Self::ChainTooDeep { capture, max_depth }
    }

    #[must_use]
    pub fn stale_placeholder(capture: CaptureId, depth: usize, recorded: usize) -> Self {
        Self::StalePlaceholder {
            capture,
            depth,
            recorded,
        }
    }

    pub fn leaf_terminated(leaf_type: TypeRef, method: impl Into<String>) -> Self {
        Self::LeafTerminated {
            leaf_type,
            method: method.into(),
        }
    }

    #[must_use]
    pub fn capture_closed(capture: CaptureId) -> Self {
        Self::CaptureClosed { capture }
    }

    #[must_use]
    pub fn unregistered_handle(capture: CaptureId) -> Self {
        Self::UnregisteredHandle { capture }
    }

    pub fn not_comparable(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::NotComparable {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn not_convertible(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::NotConvertible {
            expected,
            actual: actual.into(),
        }
    }
}

impl InvokeError {
    pub fn no_such_method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::NoSuchMethod {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn argument_mismatch(
        method: impl Into<String>,
        position: usize,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ArgumentMismatch {
            method: method.into(),
            position,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
