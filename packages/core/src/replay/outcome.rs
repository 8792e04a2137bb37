//! Replay outcomes
//!
//! A chain can end on a null value it produced itself, or stop early because
//! an intermediate was null. Both read as null to callers; the distinction is
//! kept for statistics and diagnostics.

use crate::model::Value;

/// How a replay ended
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayOutcome {
    /// Every step ran; the last one produced this value
    Completed(Value),
    /// The value reaching `step` was null, so the step never ran
    ShortCircuited { step: usize },
}

impl ReplayOutcome {
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Completed(value) => value,
            Self::ShortCircuited { .. } => Value::Null,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_short_circuit(&self) -> bool {
        matches!(self, Self::ShortCircuited { .. })
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Completed(value) => Some(value),
            Self::ShortCircuited { .. } => None,
        }
    }
}
