//! Chain registry
//!
//! Correlates the terminal placeholder of a capture with its frozen
//! [`InvocationChain`]. Entries are keyed by terminal identity and hold only a
//! weak reference, so the registry never keeps a dropped handle's chain alive.
//! Dead entries are swept once the map grows past a trigger size that starts
//! at the configured threshold and doubles with the entries that survive.

pub mod handle;

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use serde::Serialize;

pub use handle::{ArgumentHandle, TerminalKey};

use crate::config::LambdaConfig;
use crate::error::{LambdaError, LambdaResult};
use crate::model::InvocationChain;
use crate::proxy::Captured;
use crate::telemetry::LambdaStats;

static REGISTRY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`ChainRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegistryId(u64);

impl RegistryId {
    fn next() -> Self {
        Self(REGISTRY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Weak map from terminal placeholder identity to closed chain
#[derive(Debug)]
pub struct ChainRegistry {
    id: RegistryId,
    entries: DashMap<TerminalKey, Weak<InvocationChain>>,
    sweep_threshold: usize,
    /// Map size above which the next close sweeps
    next_sweep: AtomicUsize,
    stats: Arc<LambdaStats>,
}

impl ChainRegistry {
    #[must_use]
    pub fn new(config: &LambdaConfig, stats: Arc<LambdaStats>) -> Self {
        Self {
            id: RegistryId::next(),
            entries: DashMap::new(),
            sweep_threshold: config.sweep_threshold,
            next_sweep: AtomicUsize::new(config.sweep_threshold),
            stats,
        }
    }

    #[must_use]
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Close the capture that produced `terminal` and register its chain
    ///
    /// Closing a terminal that is already registered returns the live handle
    /// for it.
    ///
    /// # Errors
    ///
    /// - `NotAPlaceholder` if `terminal` was not produced by a capture of this registry
    /// - `StalePlaceholder` if `terminal` is not the last value the capture produced
    pub fn close(&self, terminal: impl Into<Captured>) -> LambdaResult<ArgumentHandle> {
        let terminal = terminal.into();
        let Some((state, depth)) = terminal.terminal() else {
            return Err(LambdaError::not_a_placeholder(terminal.type_name()));
        };
        if state.owner() != self.id {
            return Err(LambdaError::not_a_placeholder(terminal.type_name()));
        }

        let recorded = state.len();
        if depth != recorded {
            return Err(LambdaError::stale_placeholder(state.id(), depth, recorded));
        }

        let key = TerminalKey::new(state.id(), depth);
        if let Some(handle) = self.lookup_key(key) {
            self.stats.record_reuse();
            return Ok(handle);
        }

        let chain = Arc::new(state.snapshot());
        state.close();
        self.entries.insert(key, Arc::downgrade(&chain));
        self.stats.record_close();
        tracing::debug!(
            target: "chainrec::registry",
            capture = %key.capture,
            root = %state.root().name,
            chain = %chain,
            entries = self.entries.len(),
            "Closed capture"
        );

        if self.entries.len() > self.next_sweep.load(Ordering::Relaxed) {
            self.sweep();
        }

        Ok(ArgumentHandle::new(self.id, key, chain))
    }

    /// Handle already registered for `terminal`, without closing anything
    #[must_use]
    pub fn lookup(&self, terminal: &Captured) -> Option<ArgumentHandle> {
        let (state, depth) = terminal.terminal()?;
        if state.owner() != self.id {
            return None;
        }
        self.lookup_key(TerminalKey::new(state.id(), depth))
    }

    fn lookup_key(&self, key: TerminalKey) -> Option<ArgumentHandle> {
        let chain = self.entries.get(&key)?.upgrade()?;
        Some(ArgumentHandle::new(self.id, key, chain))
    }

    /// Chain registered for `handle`
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredHandle` if the handle was minted by another registry.
    pub fn resolve(&self, handle: &ArgumentHandle) -> LambdaResult<Arc<InvocationChain>> {
        if handle.registry() != self.id {
            return Err(LambdaError::unregistered_handle(handle.capture_id()));
        }

        self.entries
            .get(&handle.key())
            .and_then(|entry| entry.upgrade())
            .ok_or_else(|| LambdaError::unregistered_handle(handle.capture_id()))
    }

    /// Remove entries whose chain has been dropped, returning how many were removed
    pub fn sweep(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, chain| chain.strong_count() > 0);
        let remaining = self.entries.len();
        let removed = before.saturating_sub(remaining);

        // Next trigger is twice the survivors, never below the threshold
        self.next_sweep
            .store(self.sweep_threshold.max(remaining.saturating_mul(2)), Ordering::Relaxed);

        self.stats.record_sweep(removed as u64);
        tracing::debug!(
            target: "chainrec::registry",
            removed,
            remaining,
            "Swept dead registry entries"
        );
        removed
    }

    /// Number of entries, live or not yet swept
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose chain is still owned by some handle
    #[must_use]
    pub fn live_entries(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().strong_count() > 0)
            .count()
    }
}
