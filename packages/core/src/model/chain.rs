//! Ordered record of the calls made during one capture

use std::fmt;

use serde::Serialize;

use super::step::InvocationStep;
use super::types::TypeRef;

/// The steps recorded on a placeholder and its descendants, rooted at a subject type
///
/// An empty chain stands for the root object itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationChain {
    root_type: TypeRef,
    steps: Vec<InvocationStep>,
}

impl InvocationChain {
    #[must_use]
    pub fn new(root_type: TypeRef) -> Self {
        Self {
            root_type,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_steps(root_type: TypeRef, steps: Vec<InvocationStep>) -> Self {
        Self { root_type, steps }
    }

    #[must_use]
    pub fn root_type(&self) -> &TypeRef {
        &self.root_type
    }

    #[must_use]
    pub fn steps(&self) -> &[InvocationStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Declared type of the value the chain produces
    #[must_use]
    pub fn return_type(&self) -> &TypeRef {
        self.steps
            .last()
            .map_or(&self.root_type, InvocationStep::return_type)
    }

    /// Dotted property path, e.g. `address.city` for `getAddress().getCity()`
    ///
    /// Empty for the identity chain.
    #[must_use]
    pub fn property_path(&self) -> String {
        self.steps
            .iter()
            .map(InvocationStep::property_name)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Render the chain as JSON for diagnostics
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a recorded argument fails to serialize.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for InvocationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root_type)?;
        for step in &self.steps {
            write!(f, ".{step}")?;
        }
        Ok(())
    }
}
