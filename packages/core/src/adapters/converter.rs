//! Projection of objects into the value a closed chain extracts

use crate::error::{LambdaError, LambdaResult};
use crate::model::Value;
use crate::registry::ArgumentHandle;
use crate::replay::ReplayEngine;

/// Converts objects into the value an [`ArgumentHandle`] describes
#[derive(Debug, Clone)]
pub struct ArgumentConverter {
    handle: ArgumentHandle,
}

impl ArgumentConverter {
    #[must_use]
    pub fn new(handle: ArgumentHandle) -> Self {
        Self { handle }
    }

    #[must_use]
    pub fn handle(&self) -> &ArgumentHandle {
        &self.handle
    }

    /// Project `object`
    ///
    /// # Errors
    ///
    /// Returns `ChainReplayError` when the chain does not apply to `object`.
    pub fn convert(&self, object: &Value) -> LambdaResult<Value> {
        ReplayEngine::evaluate(self.handle.chain(), object)
    }

    /// Project `object` into a concrete Rust type; null becomes `None`
    ///
    /// # Errors
    ///
    /// - `ChainReplayError` when the chain does not apply to `object`
    /// - `NotConvertible` when the extracted value is not a `T`
    pub fn convert_as<T>(&self, object: &Value) -> LambdaResult<Option<T>>
    where
        T: TryFrom<Value, Error = Value>,
    {
        into_typed(self.convert(object)?)
    }
}

/// Convert an extracted value into a Rust type; null becomes `None`
///
/// # Errors
///
/// Returns `NotConvertible` when `value` is not a `T`.
pub fn into_typed<T>(value: Value) -> LambdaResult<Option<T>>
where
    T: TryFrom<Value, Error = Value>,
{
    match value {
        Value::Null => Ok(None),
        value => T::try_from(value)
            .map(Some)
            .map_err(|value| LambdaError::not_convertible(std::any::type_name::<T>(), value.type_name())),
    }
}
