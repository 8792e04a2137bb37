//! Placeholder factory
//!
//! Holds the descriptors of every registered subject type and decides, for
//! each declared return type, whether the next call gets a placeholder, a
//! leaf default, or fails as unsupported.

use std::sync::Arc;

use hashbrown::HashMap;

use super::capture::CaptureState;
use super::placeholder::Placeholder;
use crate::config::LambdaConfig;
use crate::error::{LambdaError, LambdaResult};
use crate::model::{TypeDescriptor, TypeRef, Value};
use crate::registry::RegistryId;
use crate::subject::Subject;
use crate::telemetry::LambdaStats;

/// What a capture step yields for a declared return type
#[derive(Debug, Clone)]
pub enum Classification {
    /// Another placeholder of this type, extending the same chain
    Proxy(Arc<TypeDescriptor>),
    /// A fixed default that terminates the chain
    Leaf(Value),
}

/// Registry of subject descriptors producing placeholders on demand
#[derive(Debug)]
pub struct PlaceholderFactory {
    types: HashMap<String, Arc<TypeDescriptor>>,
    config: LambdaConfig,
    stats: Arc<LambdaStats>,
}

impl PlaceholderFactory {
    #[must_use]
    pub fn new(config: LambdaConfig, stats: Arc<LambdaStats>) -> Self {
        Self {
            types: HashMap::new(),
            config,
            stats,
        }
    }

    /// Register a subject type by its descriptor
    pub fn register<T: Subject>(&mut self) -> &mut Self {
        self.register_descriptor(T::descriptor())
    }

    /// Register a descriptor; a later registration under the same name replaces it
    pub fn register_descriptor(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        tracing::debug!(
            target: "chainrec::capture",
            type_name = %descriptor.name,
            methods = descriptor.methods.len(),
            kind = ?descriptor.kind,
            "Registered subject type"
        );
        self.types.insert(descriptor.name.clone(), Arc::new(descriptor));
        self
    }

    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&Arc<TypeDescriptor>> {
        self.types.get(name)
    }

    /// Names of every registered type
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    #[must_use]
    pub fn config(&self) -> &LambdaConfig {
        &self.config
    }

    /// Whether a call returning `type_ref` yields another placeholder
    #[must_use]
    pub fn is_proxyable(&self, type_ref: &TypeRef) -> bool {
        matches!(self.classify(type_ref), Ok(Classification::Proxy(_)))
    }

    /// Decide what a step declared to return `type_ref` produces
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSubjectType` for a named type that is not registered.
    pub fn classify(&self, type_ref: &TypeRef) -> LambdaResult<Classification> {
        if let Some(default) = type_ref.primitive_default() {
            return Ok(Classification::Leaf(default));
        }

        let TypeRef::Named(name) = type_ref else {
            return Err(LambdaError::unsupported_subject(type_ref.to_string(), "not a subject type"));
        };

        match self.types.get(name) {
            Some(descriptor) if descriptor.is_interceptable() => {
                Ok(Classification::Proxy(Arc::clone(descriptor)))
            }
            Some(_) => Ok(Classification::Leaf(Value::Null)),
            None => Err(LambdaError::unsupported_subject(
                name.as_str(),
                "type is not registered with the placeholder factory",
            )),
        }
    }

    /// Open a capture rooted at the registered type `type_name`
    ///
    /// # Errors
    ///
    /// - `UnsupportedSubjectType` if the type is not registered
    /// - `NestedCaptureNotClosed` if another capture is open on this thread
    pub fn capture(self: &Arc<Self>, type_name: &str, owner: RegistryId) -> LambdaResult<Placeholder> {
        let descriptor = self.types.get(type_name).cloned().ok_or_else(|| {
            LambdaError::unsupported_subject(type_name, "type is not registered with the placeholder factory")
        })?;

        let state = CaptureState::open(Arc::clone(self), owner, Arc::clone(&descriptor))?;
        self.stats.record_capture();
        tracing::debug!(
            target: "chainrec::capture",
            capture = %state.id(),
            root = %descriptor.name,
            "Opened capture"
        );

        Ok(Placeholder::root(state, descriptor))
    }

    /// Open a capture rooted at `T`
    ///
    /// # Errors
    ///
    /// See [`PlaceholderFactory::capture`].
    pub fn capture_type<T: Subject>(self: &Arc<Self>, owner: RegistryId) -> LambdaResult<Placeholder> {
        self.capture(&T::descriptor().name, owner)
    }
}
