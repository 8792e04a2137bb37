//! Telemetry for capture and replay

pub mod stats;

pub use stats::{LambdaStats, LambdaStatsSnapshot};
