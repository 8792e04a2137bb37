//! A single recorded invocation

use std::fmt;

use serde::Serialize;

use super::types::{MethodSignature, TypeRef};
use super::value::Value;

/// One intercepted call: method identity, supplied arguments and declared return type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationStep {
    declaring_type: String,
    method_name: String,
    argument_signature: Vec<TypeRef>,
    arguments: Vec<Value>,
    return_type: TypeRef,
}

impl InvocationStep {
    /// Record a call of `signature`, declared on `declaring_type`, with `arguments`
    pub fn new(declaring_type: impl Into<String>, signature: &MethodSignature, arguments: Vec<Value>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            method_name: signature.name.clone(),
            argument_signature: signature.params.clone(),
            arguments,
            return_type: signature.returns.clone(),
        }
    }

    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    #[must_use]
    pub fn argument_signature(&self) -> &[TypeRef] {
        &self.argument_signature
    }

    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    #[must_use]
    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Property name implied by the method: `getCity` and `isActive` become
    /// `city` and `active`, anything else is kept as is
    #[must_use]
    pub fn property_name(&self) -> String {
        let name = self.method_name.as_str();
        let stripped = ["get", "is"].iter().find_map(|prefix| {
            name.strip_prefix(prefix)
                .filter(|rest| rest.chars().next().is_some_and(char::is_uppercase))
        });

        match stripped {
            Some(rest) => {
                let mut chars = rest.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_lowercase().chain(chars).collect()
                })
            }
            None => name.to_string(),
        }
    }
}

impl fmt::Display for InvocationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method_name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
