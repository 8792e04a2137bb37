//! Placeholders and the values a capture step returns
//!
//! Every call on a [`Placeholder`] is checked against the declared signature,
//! appended to the shared capture, and answered with the next placeholder or
//! a leaf default. Equality, hashing and formatting of placeholders are
//! identity based and never recorded.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use super::capture::{CaptureId, CaptureState};
use super::factory::Classification;
use crate::error::{LambdaError, LambdaResult};
use crate::model::{InvocationChain, InvocationStep, TypeDescriptor, TypeRef, Value};

/// Stand-in of a subject type that records the calls made on it
#[derive(Clone)]
pub struct Placeholder {
    state: Rc<CaptureState>,
    subject: Arc<TypeDescriptor>,
    depth: usize,
}

impl Placeholder {
    pub(crate) fn root(state: Rc<CaptureState>, subject: Arc<TypeDescriptor>) -> Self {
        Self {
            state,
            subject,
            depth: 0,
        }
    }

    pub(crate) fn state(&self) -> &Rc<CaptureState> {
        &self.state
    }

    #[must_use]
    pub fn capture_id(&self) -> CaptureId {
        self.state.id()
    }

    /// Number of steps recorded before this placeholder was produced
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn subject_type(&self) -> &TypeDescriptor {
        &self.subject
    }

    /// Steps recorded so far in this placeholder's capture
    #[must_use]
    pub fn recorded(&self) -> InvocationChain {
        self.state.snapshot()
    }

    /// Record a call without arguments
    ///
    /// # Errors
    ///
    /// See [`Placeholder::call`].
    pub fn get(&self, method: &str) -> LambdaResult<Captured> {
        self.call(method, &[])
    }

    /// Record a call of `method` with `args`
    ///
    /// # Errors
    ///
    /// - `CaptureClosed` if the capture was already closed
    /// - `StalePlaceholder` if a later placeholder of the capture exists
    /// - `NoSuchMethod` / `ArgumentMismatch` if the call does not fit a declared signature
    /// - `ChainTooDeep` if the configured maximum depth is reached
    /// - `UnsupportedSubjectType` if the declared return type is not registered
    pub fn call(&self, method: &str, args: &[Value]) -> LambdaResult<Captured> {
        let state = &self.state;
        if state.is_closed() {
            return Err(LambdaError::capture_closed(state.id()));
        }

        let recorded = state.len();
        if recorded != self.depth {
            return Err(LambdaError::stale_placeholder(state.id(), self.depth, recorded));
        }

        let signature = match self.subject.find_method(method, args.len()) {
            Some(signature) => signature,
            None if self.subject.has_method(method) => {
                return Err(LambdaError::argument_mismatch(
                    format!("{}.{method}", self.subject.name),
                    format!("no overload takes {} argument(s)", args.len()),
                ));
            }
            None => {
                return Err(LambdaError::no_such_method(&self.subject.name, method, args.len()));
            }
        };

        for (position, (param, arg)) in signature.params.iter().zip(args).enumerate() {
            if !param.accepts(arg) {
                return Err(LambdaError::argument_mismatch(
                    format!("{}.{method}", self.subject.name),
                    format!("argument {position} expects {param}, got {}", arg.type_name()),
                ));
            }
        }

        let factory = state.factory();
        let max_depth = factory.config().max_chain_depth;
        if recorded >= max_depth {
            return Err(LambdaError::chain_too_deep(state.id(), max_depth));
        }

        let next = factory.classify(&signature.returns)?;

        tracing::trace!(
            target: "chainrec::capture",
            capture = %state.id(),
            step = recorded,
            signature = %signature,
            declared_on = %self.subject.name,
            "Recorded invocation"
        );
        state.push(InvocationStep::new(self.subject.name.as_str(), signature, args.to_vec()));

        let depth = recorded + 1;
        Ok(match next {
            Classification::Proxy(subject) => Captured::Placeholder(Self {
                state: Rc::clone(state),
                subject,
                depth,
            }),
            Classification::Leaf(default) => Captured::Leaf(LeafCapture {
                state: Rc::clone(state),
                leaf_type: signature.returns.clone(),
                default,
                depth,
            }),
        })
    }
}

impl PartialEq for Placeholder {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state) && self.depth == other.depth
    }
}

impl Eq for Placeholder {}

impl Hash for Placeholder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id().hash(state);
        self.depth.hash(state);
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placeholder")
            .field("capture", &self.state.id())
            .field("subject", &self.subject.name)
            .field("depth", &self.depth)
            .finish()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Placeholder<{}>{}@{}", self.subject.name, self.state.id(), self.depth)
    }
}

/// Leaf default returned by a step whose declared type cannot be proxied
///
/// It still remembers its capture so the chain can be closed from it.
#[derive(Clone)]
pub struct LeafCapture {
    state: Rc<CaptureState>,
    leaf_type: TypeRef,
    default: Value,
    depth: usize,
}

impl LeafCapture {
    pub(crate) fn state(&self) -> &Rc<CaptureState> {
        &self.state
    }

    #[must_use]
    pub fn capture_id(&self) -> CaptureId {
        self.state.id()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn leaf_type(&self) -> &TypeRef {
        &self.leaf_type
    }

    /// The fixed default standing in for the real value
    #[must_use]
    pub fn default_value(&self) -> &Value {
        &self.default
    }
}

impl PartialEq for LeafCapture {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state) && self.depth == other.depth
    }
}

impl Eq for LeafCapture {}

impl Hash for LeafCapture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id().hash(state);
        self.depth.hash(state);
    }
}

impl fmt::Debug for LeafCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafCapture")
            .field("capture", &self.state.id())
            .field("leaf_type", &self.leaf_type)
            .field("default", &self.default)
            .field("depth", &self.depth)
            .finish()
    }
}

/// Result of a capture step, or any value handed back for closing
#[derive(Debug, Clone, PartialEq)]
pub enum Captured {
    Placeholder(Placeholder),
    Leaf(LeafCapture),
    /// A value that did not come from a capture
    Detached(Value),
}

impl Captured {
    /// Record a call without arguments on the captured placeholder
    ///
    /// # Errors
    ///
    /// See [`Captured::call`].
    pub fn get(&self, method: &str) -> LambdaResult<Captured> {
        self.call(method, &[])
    }

    /// Record a call on the captured placeholder
    ///
    /// # Errors
    ///
    /// Fails with `LeafTerminated` on a leaf, `NotAPlaceholder` on a detached
    /// value, and as [`Placeholder::call`] otherwise.
    pub fn call(&self, method: &str, args: &[Value]) -> LambdaResult<Captured> {
        match self {
            Self::Placeholder(placeholder) => placeholder.call(method, args),
            Self::Leaf(leaf) => Err(LambdaError::leaf_terminated(leaf.leaf_type.clone(), method)),
            Self::Detached(value) => Err(LambdaError::not_a_placeholder(value.type_name())),
        }
    }

    #[must_use]
    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Self::Placeholder(placeholder) => Some(placeholder),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&LeafCapture> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    #[must_use]
    pub fn capture_id(&self) -> Option<CaptureId> {
        match self {
            Self::Placeholder(placeholder) => Some(placeholder.capture_id()),
            Self::Leaf(leaf) => Some(leaf.capture_id()),
            Self::Detached(_) => None,
        }
    }

    /// Capture state and depth of the terminal, if it came from a capture
    pub(crate) fn terminal(&self) -> Option<(&Rc<CaptureState>, usize)> {
        match self {
            Self::Placeholder(placeholder) => Some((placeholder.state(), placeholder.depth())),
            Self::Leaf(leaf) => Some((leaf.state(), leaf.depth())),
            Self::Detached(_) => None,
        }
    }

    /// Runtime type name for diagnostics
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Placeholder(placeholder) => placeholder.subject.name.clone(),
            Self::Leaf(leaf) => leaf.leaf_type.to_string(),
            Self::Detached(value) => value.type_name().to_string(),
        }
    }
}

impl From<Placeholder> for Captured {
    fn from(placeholder: Placeholder) -> Self {
        Self::Placeholder(placeholder)
    }
}

impl From<LeafCapture> for Captured {
    fn from(leaf: LeafCapture) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Value> for Captured {
    fn from(value: Value) -> Self {
        Self::Detached(value)
    }
}

impl From<&Captured> for Captured {
    fn from(captured: &Captured) -> Self {
        captured.clone()
    }
}

impl From<&Placeholder> for Captured {
    fn from(placeholder: &Placeholder) -> Self {
        Self::Placeholder(placeholder.clone())
    }
}
