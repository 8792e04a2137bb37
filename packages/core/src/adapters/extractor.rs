//! Value extraction through a closed chain

use crate::error::LambdaResult;
use crate::model::Value;
use crate::registry::ArgumentHandle;
use crate::replay::{ReplayEngine, ReplayOutcome};

/// Extracts the value an [`ArgumentHandle`] describes from concrete objects
#[derive(Debug, Clone)]
pub struct ArgumentExtractor {
    handle: ArgumentHandle,
}

impl ArgumentExtractor {
    #[must_use]
    pub fn new(handle: ArgumentHandle) -> Self {
        Self { handle }
    }

    #[must_use]
    pub fn handle(&self) -> &ArgumentHandle {
        &self.handle
    }

    /// Value of the chain on `object`, or null
    ///
    /// # Errors
    ///
    /// Returns `ChainReplayError` when the chain does not apply to `object`.
    pub fn extract(&self, object: &Value) -> LambdaResult<Value> {
        ReplayEngine::evaluate(self.handle.chain(), object)
    }

    /// Like [`ArgumentExtractor::extract`] but reporting a null short-circuit
    ///
    /// # Errors
    ///
    /// Returns `ChainReplayError` when the chain does not apply to `object`.
    pub fn extract_outcome(&self, object: &Value) -> LambdaResult<ReplayOutcome> {
        ReplayEngine::evaluate_outcome(self.handle.chain(), object)
    }

    /// Extract from every object, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the first `ChainReplayError` encountered.
    pub fn extract_all<'a, I>(&self, objects: I) -> LambdaResult<Vec<Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        objects.into_iter().map(|object| self.extract(object)).collect()
    }
}
