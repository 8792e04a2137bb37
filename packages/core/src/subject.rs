//! Participation in capture and replay
//!
//! A type takes part by implementing [`Subject`]: it publishes the methods a
//! placeholder may intercept through [`Subject::descriptor`] and dispatches a
//! recorded call on a live instance through [`Subject::invoke`]. Replay always
//! dispatches on the runtime instance, so two implementations sharing a
//! descriptor name behave like overrides of the same method.
//!
//! ```
//! use chainrec_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct Address {
//!     city: String,
//! }
//!
//! impl Subject for Address {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::new("Address").getter("getCity", TypeRef::Str)
//!     }
//!
//!     fn type_name(&self) -> &str {
//!         "Address"
//!     }
//!
//!     fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
//!         match call.method() {
//!             "getCity" => Ok(self.city.as_str().into()),
//!             _ => Err(call.unknown(self.type_name())),
//!         }
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::InvokeError;
use crate::model::{TypeDescriptor, Value};

/// A type whose method calls can be captured on a placeholder and replayed on instances
pub trait Subject: fmt::Debug + Send + Sync + 'static {
    /// Declared interceptable surface of the type
    fn descriptor() -> TypeDescriptor
    where
        Self: Sized;

    /// Runtime type name of this instance
    fn type_name(&self) -> &str;

    /// Perform a recorded call on this instance
    ///
    /// # Errors
    ///
    /// Returns an `InvokeError` when the method is unknown to the runtime
    /// type, the arguments do not fit, or the call itself fails.
    fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError>;

    /// Value this instance is ordered by under natural ordering
    fn sort_key(&self) -> Option<Value> {
        None
    }
}

/// A call dispatched to [`Subject::invoke`]
#[derive(Debug, Clone, Copy)]
pub struct MethodCall<'a> {
    method: &'a str,
    args: &'a [Value],
}

impl<'a> MethodCall<'a> {
    #[must_use]
    pub fn new(method: &'a str, args: &'a [Value]) -> Self {
        Self { method, args }
    }

    #[must_use]
    pub fn method(&self) -> &'a str {
        self.method
    }

    #[must_use]
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Error for a method the runtime type does not implement
    #[must_use]
    pub fn unknown(&self, type_name: &str) -> InvokeError {
        InvokeError::no_such_method(type_name, self.method)
    }

    /// Argument at `position`
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::ArgumentMismatch` if fewer arguments were supplied.
    pub fn arg(&self, position: usize) -> Result<&'a Value, InvokeError> {
        self.args.get(position).ok_or_else(|| {
            InvokeError::argument_mismatch(self.method, position, "an argument", "nothing")
        })
    }

    /// Integer argument at `position`
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::ArgumentMismatch` if missing or not an integer.
    pub fn int(&self, position: usize) -> Result<i64, InvokeError> {
        let value = self.arg(position)?;
        value.as_i64().ok_or_else(|| self.mismatch(position, "int", value))
    }

    /// Numeric argument at `position`
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::ArgumentMismatch` if missing or not numeric.
    pub fn float(&self, position: usize) -> Result<f64, InvokeError> {
        let value = self.arg(position)?;
        value.as_f64().ok_or_else(|| self.mismatch(position, "float", value))
    }

    /// Boolean argument at `position`
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::ArgumentMismatch` if missing or not a boolean.
    pub fn bool(&self, position: usize) -> Result<bool, InvokeError> {
        let value = self.arg(position)?;
        value.as_bool().ok_or_else(|| self.mismatch(position, "bool", value))
    }

    /// String argument at `position`
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::ArgumentMismatch` if missing or not a string.
    pub fn str(&self, position: usize) -> Result<&'a str, InvokeError> {
        let value = self.arg(position)?;
        value.as_str().ok_or_else(|| self.mismatch(position, "str", value))
    }

    /// Object argument at `position`
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::ArgumentMismatch` if missing or not an object.
    pub fn object(&self, position: usize) -> Result<&'a Arc<dyn Subject>, InvokeError> {
        let value = self.arg(position)?;
        value.as_object().ok_or_else(|| self.mismatch(position, "object", value))
    }

    fn mismatch(&self, position: usize, expected: &str, actual: &Value) -> InvokeError {
        InvokeError::argument_mismatch(self.method, position, expected, actual.type_name())
    }
}
