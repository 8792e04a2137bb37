//! Declared type surface of subjects
//!
//! [`TypeRef`] names a parameter or return type, [`MethodSignature`] a declared
//! method, and [`TypeDescriptor`] the full interceptable surface of a subject
//! type. The placeholder factory consults descriptors to decide whether a
//! return type gets another placeholder or terminates the chain.

use std::fmt;

use serde::Serialize;

use super::value::Value;

/// Reference to a declared parameter or return type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum TypeRef {
    /// No meaningful value
    Unit,
    Bool,
    Int,
    Float,
    Str,
    /// A subject type, looked up by name in the factory
    Named(String),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Whether this is one of the built-in leaf kinds
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Named(_))
    }

    /// Fixed default returned when a capture step yields this primitive type
    #[must_use]
    pub fn primitive_default(&self) -> Option<Value> {
        match self {
            Self::Unit => Some(Value::Null),
            Self::Bool => Some(Value::Bool(false)),
            Self::Int => Some(Value::Int(0)),
            Self::Float => Some(Value::Float(0.0)),
            Self::Str => Some(Value::Str(String::new())),
            Self::Named(_) => None,
        }
    }

    /// Whether `value` may be supplied for a parameter of this type
    ///
    /// Named parameters take any object or null; the runtime subject
    /// decides at replay whether the object is acceptable.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_) | Value::Int(_))
            | (Self::Str, Value::Str(_))
            | (Self::Named(_), Value::Object(_) | Value::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Str => f.write_str("str"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// A declared method: name, parameter types and return type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<TypeRef>,
    pub returns: TypeRef,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, params: impl IntoIterator<Item = TypeRef>, returns: TypeRef) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
            returns,
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

/// How the factory treats a registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Calls on it are intercepted and recorded
    Proxyable,
    /// Cannot be proxied; steps returning it terminate with a null default
    Sealed,
}

/// Interceptable surface of a subject type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: SubjectKind,
    pub methods: Vec<MethodSignature>,
}

impl TypeDescriptor {
    /// Describe a proxyable type with no methods yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SubjectKind::Proxyable,
            methods: Vec::new(),
        }
    }

    /// Describe a type that is never proxied
    pub fn sealed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SubjectKind::Sealed,
            methods: Vec::new(),
        }
    }

    /// Declare a method
    #[must_use]
    pub fn method(
        mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = TypeRef>,
        returns: TypeRef,
    ) -> Self {
        self.methods.push(MethodSignature::new(name, params, returns));
        self
    }

    /// Declare a method without parameters
    #[must_use]
    pub fn getter(self, name: impl Into<String>, returns: TypeRef) -> Self {
        self.method(name, [], returns)
    }

    /// Find the overload of `name` taking `arity` arguments
    #[must_use]
    pub fn find_method(&self, name: &str, arity: usize) -> Option<&MethodSignature> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.arity() == arity)
    }

    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// Whether placeholders of this type can intercept anything
    #[must_use]
    pub fn is_interceptable(&self) -> bool {
        self.kind == SubjectKind::Proxyable && !self.methods.is_empty()
    }

    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Named(self.name.clone())
    }
}
