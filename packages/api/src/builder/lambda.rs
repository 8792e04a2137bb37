//! `Lambda`: capture context tying the factory, registry and replay together
//!
//! Every extraction resolves the handle through the registry before replay,
//! and every replay is counted in the context statistics.

use std::cmp::Ordering;
use std::sync::Arc;

use chainrec_core::adapters::{ArgumentComparator, ArgumentConverter, ArgumentExtractor, into_typed};
use chainrec_core::model::{InvocationChain, Value};
use chainrec_core::proxy::{Captured, Placeholder, PlaceholderFactory};
use chainrec_core::registry::{ArgumentHandle, ChainRegistry};
use chainrec_core::replay::{ReplayEngine, ReplayOutcome};
use chainrec_core::subject::Subject;
use chainrec_core::telemetry::{LambdaStats, LambdaStatsSnapshot};
use chainrec_core::LambdaResult;

use super::core::LambdaBuilder;

/// Capture context: hands out placeholders, closes chains and replays them
///
/// A context is `Send + Sync`; share it behind an `Arc` to capture on
/// several threads at once. Captures themselves stay on the thread that
/// started them until closed.
pub struct Lambda {
    factory: Arc<PlaceholderFactory>,
    registry: ChainRegistry,
    stats: Arc<LambdaStats>,
    debug_enabled: bool,
}

impl Lambda {
    /// Start configuring a context
    #[must_use]
    pub fn builder() -> LambdaBuilder {
        LambdaBuilder::new()
    }

    pub(crate) fn from_parts(
        factory: Arc<PlaceholderFactory>,
        registry: ChainRegistry,
        stats: Arc<LambdaStats>,
        debug_enabled: bool,
    ) -> Self {
        Self {
            factory,
            registry,
            stats,
            debug_enabled,
        }
    }

    /// Root placeholder of `T`
    ///
    /// # Errors
    ///
    /// - `UnsupportedSubjectType` if `T` was not registered
    /// - `NestedCaptureNotClosed` if another capture is open on this thread
    pub fn capture<T: Subject>(&self) -> LambdaResult<Placeholder> {
        self.factory.capture_type::<T>(self.registry.id())
    }

    /// Root placeholder of the registered type named `type_name`
    ///
    /// # Errors
    ///
    /// See [`Lambda::capture`].
    pub fn capture_named(&self, type_name: &str) -> LambdaResult<Placeholder> {
        self.factory.capture(type_name, self.registry.id())
    }

    /// Close the capture that produced `terminal` and register its chain
    ///
    /// # Errors
    ///
    /// - `NotAPlaceholder` if `terminal` did not come from a capture of this context
    /// - `StalePlaceholder` if `terminal` is not the last value of its capture
    pub fn handle_of(&self, terminal: impl Into<Captured>) -> LambdaResult<ArgumentHandle> {
        let handle = self.registry.close(terminal)?;
        if self.debug_enabled {
            log::debug!("Registered argument {} for capture {}", handle, handle.capture_id());
        }
        Ok(handle)
    }

    /// Handle already registered for `terminal`, if any
    #[must_use]
    pub fn argument(&self, terminal: &Captured) -> Option<ArgumentHandle> {
        self.registry.lookup(terminal)
    }

    /// Chain registered for `handle`
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredHandle` for a handle minted by another context.
    pub fn resolve(&self, handle: &ArgumentHandle) -> LambdaResult<Arc<InvocationChain>> {
        self.registry.resolve(handle)
    }

    /// Value `handle` describes on `object`, or null
    ///
    /// # Errors
    ///
    /// - `UnregisteredHandle` for a handle minted by another context
    /// - `ChainReplayError` when the chain does not apply to `object`
    pub fn extract_value(&self, handle: &ArgumentHandle, object: &Value) -> LambdaResult<Value> {
        let chain = self.registry.resolve(handle)?;
        self.replay(&chain, object)
    }

    /// Compare two objects on the value `handle` extracts, nulls first
    ///
    /// # Errors
    ///
    /// - `ChainReplayError` if either extraction fails
    /// - `NotComparable` if the extracted values have no natural ordering
    pub fn compare(&self, handle: &ArgumentHandle, left: &Value, right: &Value) -> LambdaResult<Ordering> {
        let comparator = ArgumentComparator::new(handle.clone());
        self.compare_using(&comparator, left, right)
    }

    /// Compare two objects on the value `handle` extracts, with a supplied ordering
    ///
    /// # Errors
    ///
    /// Returns `ChainReplayError` if either extraction fails.
    pub fn compare_with<F>(&self, handle: &ArgumentHandle, left: &Value, right: &Value, ordering: F) -> LambdaResult<Ordering>
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        let comparator = ArgumentComparator::new(handle.clone()).with_ordering(ordering);
        self.compare_using(&comparator, left, right)
    }

    /// Project `object` through `handle`
    ///
    /// # Errors
    ///
    /// See [`Lambda::extract_value`].
    pub fn convert(&self, handle: &ArgumentHandle, object: &Value) -> LambdaResult<Value> {
        self.extract_value(handle, object)
    }

    /// Project `object` through `handle` into a Rust type; null becomes `None`
    ///
    /// # Errors
    ///
    /// - See [`Lambda::extract_value`]
    /// - `NotConvertible` if the extracted value is not a `T`
    pub fn convert_as<T>(&self, handle: &ArgumentHandle, object: &Value) -> LambdaResult<Option<T>>
    where
        T: TryFrom<Value, Error = Value>,
    {
        into_typed(self.extract_value(handle, object)?)
    }

    /// Reusable extractor for a registered handle
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredHandle` for a handle minted by another context.
    pub fn extractor(&self, handle: &ArgumentHandle) -> LambdaResult<ArgumentExtractor> {
        self.registry.resolve(handle)?;
        Ok(ArgumentExtractor::new(handle.clone()))
    }

    /// Reusable comparator for a registered handle
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredHandle` for a handle minted by another context.
    pub fn comparator(&self, handle: &ArgumentHandle) -> LambdaResult<ArgumentComparator> {
        self.registry.resolve(handle)?;
        Ok(ArgumentComparator::new(handle.clone()))
    }

    /// Reusable converter for a registered handle
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredHandle` for a handle minted by another context.
    pub fn converter(&self, handle: &ArgumentHandle) -> LambdaResult<ArgumentConverter> {
        self.registry.resolve(handle)?;
        Ok(ArgumentConverter::new(handle.clone()))
    }

    /// Snapshot of the context statistics
    #[must_use]
    pub fn stats(&self) -> LambdaStatsSnapshot {
        self.stats.snapshot()
    }

    #[must_use]
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    #[must_use]
    pub fn factory(&self) -> &Arc<PlaceholderFactory> {
        &self.factory
    }

    fn compare_using(&self, comparator: &ArgumentComparator, left: &Value, right: &Value) -> LambdaResult<Ordering> {
        let chain = self.registry.resolve(comparator.handle())?;
        let left = self.replay(&chain, left)?;
        let right = self.replay(&chain, right)?;
        comparator.compare_extracted(&left, &right)
    }

    fn replay(&self, chain: &InvocationChain, object: &Value) -> LambdaResult<Value> {
        self.stats.record_replay();
        match ReplayEngine::evaluate_outcome(chain, object) {
            Ok(outcome) => {
                if let ReplayOutcome::ShortCircuited { step } = outcome {
                    self.stats.record_short_circuit();
                    if self.debug_enabled {
                        log::debug!("Replay of {chain} stopped on null before step {step}");
                    }
                }
                Ok(outcome.into_value())
            }
            Err(error) => {
                self.stats.record_replay_failure();
                tracing::warn!(
                    target: "chainrec::replay",
                    chain = %chain,
                    error = %error,
                    "Replay failed"
                );
                Err(error)
            }
        }
    }
}

impl std::fmt::Debug for Lambda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lambda")
            .field("registry", &self.registry.id())
            .field("entries", &self.registry.len())
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
