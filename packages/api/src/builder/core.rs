//! `LambdaBuilder`: fluent construction of a [`Lambda`] capture context
//!
//! Collects subject registrations and configuration, validating both when
//! the context is built.

use std::sync::Arc;

use chainrec_core::config::{LambdaConfig, Validator};
use chainrec_core::model::TypeDescriptor;
use chainrec_core::proxy::PlaceholderFactory;
use chainrec_core::registry::ChainRegistry;
use chainrec_core::subject::Subject;
use chainrec_core::telemetry::LambdaStats;
use chainrec_core::LambdaResult;

use super::lambda::Lambda;

/// Builder for a [`Lambda`] capture context
#[derive(Debug, Clone, Default)]
pub struct LambdaBuilder {
    /// Capture and registry configuration
    pub(crate) config: LambdaConfig,
    /// Subject types placeholders can be created for
    pub(crate) descriptors: Vec<TypeDescriptor>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl LambdaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make placeholders of `T` available
    #[must_use]
    pub fn register<T: Subject>(mut self) -> Self {
        self.descriptors.push(T::descriptor());
        self
    }

    /// Make placeholders of a hand-written descriptor available
    ///
    /// Useful for interface-like types implemented by several subjects.
    #[must_use]
    pub fn register_descriptor(mut self, descriptor: TypeDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: LambdaConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum number of steps a single capture may record
    #[must_use]
    pub fn max_chain_depth(mut self, depth: usize) -> Self {
        self.config.max_chain_depth = depth;
        self
    }

    /// Registry size above which dead entries are swept
    #[must_use]
    pub fn sweep_threshold(mut self, threshold: usize) -> Self {
        self.config.sweep_threshold = threshold;
        self
    }

    /// Log every close and replay through the `log` facade
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Validate the configuration and build the context
    ///
    /// # Errors
    ///
    /// Returns `LambdaError::Configuration` if the configuration is invalid.
    pub fn build(self) -> LambdaResult<Lambda> {
        self.config.validate()?;

        let stats = Arc::new(LambdaStats::new());
        let mut factory = PlaceholderFactory::new(self.config.clone(), Arc::clone(&stats));
        for descriptor in self.descriptors {
            factory.register_descriptor(descriptor);
        }
        let registry = ChainRegistry::new(&self.config, Arc::clone(&stats));

        if self.debug_enabled {
            log::debug!(
                "Built capture context with {} subject type(s), max chain depth {}",
                factory.type_names().count(),
                self.config.max_chain_depth
            );
        }

        Ok(Lambda::from_parts(
            Arc::new(factory),
            registry,
            stats,
            self.debug_enabled,
        ))
    }
}
