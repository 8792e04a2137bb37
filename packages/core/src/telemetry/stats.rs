//! Capture and replay statistics
//!
//! Relaxed atomic counters shared by the factory, the registry and the facade.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for capture, registration and replay activity
#[derive(Debug, Default)]
pub struct LambdaStats {
    /// Number of captures opened
    pub captures_opened: AtomicU64,
    /// Number of chains closed into the registry
    pub chains_closed: AtomicU64,
    /// Number of `close` calls answered with an already registered handle
    pub handles_reused: AtomicU64,
    /// Number of chain replays
    pub replays: AtomicU64,
    /// Number of replays that stopped on a null intermediate
    pub null_short_circuits: AtomicU64,
    /// Number of replays that failed
    pub replay_failures: AtomicU64,
    /// Number of registry sweeps
    pub sweeps: AtomicU64,
    /// Number of dead entries removed by sweeps
    pub swept_entries: AtomicU64,
}

impl LambdaStats {
    /// Create zeroed statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_capture(&self) {
        self.captures_opened.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_close(&self) {
        self.chains_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reuse(&self) {
        self.handles_reused.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_replay(&self) {
        self.replays.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_short_circuit(&self) {
        self.null_short_circuits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_replay_failure(&self) {
        self.replay_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sweep that removed `removed` dead entries
    pub fn record_sweep(&self, removed: u64) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        self.swept_entries.fetch_add(removed, Ordering::Relaxed);
    }

    /// Get statistics snapshot
    #[must_use]
    pub fn snapshot(&self) -> LambdaStatsSnapshot {
        LambdaStatsSnapshot {
            captures_opened: self.captures_opened.load(Ordering::Relaxed),
            chains_closed: self.chains_closed.load(Ordering::Relaxed),
            handles_reused: self.handles_reused.load(Ordering::Relaxed),
            replays: self.replays.load(Ordering::Relaxed),
            null_short_circuits: self.null_short_circuits.load(Ordering::Relaxed),
            replay_failures: self.replay_failures.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            swept_entries: self.swept_entries.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`LambdaStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct LambdaStatsSnapshot {
    pub captures_opened: u64,
    pub chains_closed: u64,
    pub handles_reused: u64,
    pub replays: u64,
    pub null_short_circuits: u64,
    pub replay_failures: u64,
    pub sweeps: u64,
    pub swept_entries: u64,
}

impl LambdaStatsSnapshot {
    /// Share of replays that ended on a null intermediate, as a percentage
    #[must_use]
    pub fn short_circuit_rate(&self) -> f64 {
        // Precision loss acceptable for rate statistics
        #[allow(clippy::cast_precision_loss)]
        let replays = self.replays as f64;
        #[allow(clippy::cast_precision_loss)]
        let short = self.null_short_circuits as f64;

        if replays > 0.0 {
            (short / replays) * 100.0
        } else {
            0.0
        }
    }
}
