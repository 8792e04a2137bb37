//! Replay of recorded chains against concrete values
//!
//! Each step is dispatched on the runtime subject of the current value. A null
//! intermediate stops the walk and yields null instead of an error.

use std::sync::Arc;

use super::outcome::ReplayOutcome;
use crate::error::{LambdaError, LambdaResult};
use crate::model::{InvocationChain, Value};
use crate::subject::MethodCall;

/// Stateless evaluator for invocation chains
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayEngine;

impl ReplayEngine {
    /// Apply `chain` to `root`, returning the final value or null
    ///
    /// # Errors
    ///
    /// Returns `ChainReplayError` naming the failing step when a step cannot
    /// be applied to the runtime value it reaches.
    pub fn evaluate(chain: &InvocationChain, root: &Value) -> LambdaResult<Value> {
        Self::evaluate_outcome(chain, root).map(ReplayOutcome::into_value)
    }

    /// Apply `chain` to `root`, keeping apart a null result and a null short-circuit
    ///
    /// # Errors
    ///
    /// See [`ReplayEngine::evaluate`].
    pub fn evaluate_outcome(chain: &InvocationChain, root: &Value) -> LambdaResult<ReplayOutcome> {
        let mut current = root.clone();

        for (index, step) in chain.steps().iter().enumerate() {
            let subject = match &current {
                Value::Null => {
                    tracing::trace!(
                        target: "chainrec::replay",
                        chain = %chain,
                        step = index,
                        "Null intermediate, short-circuiting"
                    );
                    return Ok(ReplayOutcome::ShortCircuited { step: index });
                }
                Value::Object(subject) => Arc::clone(subject),
                leaf => {
                    return Err(LambdaError::chain_replay(
                        index,
                        step,
                        leaf.type_name(),
                        "leaf values have no methods",
                    ));
                }
            };

            let call = MethodCall::new(step.method_name(), step.arguments());
            current = subject.invoke(&call).map_err(|error| {
                LambdaError::chain_replay(index, step, subject.type_name(), error.to_string())
            })?;

            tracing::trace!(
                target: "chainrec::replay",
                step = index,
                invocation = %step,
                on = subject.type_name(),
                result = %current,
                "Replayed step"
            );
        }

        Ok(ReplayOutcome::Completed(current))
    }
}
