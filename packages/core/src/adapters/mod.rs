//! Comparator and converter adapters
//!
//! The entry points collection, grouping and matcher code use to consume
//! closed chains: extraction, comparison and conversion.

pub mod comparator;
pub mod converter;
pub mod extractor;
pub mod ordering;

use std::cmp::Ordering;

pub use comparator::{ArgumentComparator, ValueOrdering};
pub use converter::{ArgumentConverter, into_typed};
pub use extractor::ArgumentExtractor;
pub use ordering::{natural_order, nulls_first};

use crate::error::LambdaResult;
use crate::model::Value;
use crate::registry::ArgumentHandle;
use crate::replay::ReplayEngine;

/// Value `handle` describes on `object`, or null
///
/// # Errors
///
/// Returns `ChainReplayError` when the chain does not apply to `object`.
pub fn extract_value(handle: &ArgumentHandle, object: &Value) -> LambdaResult<Value> {
    ReplayEngine::evaluate(handle.chain(), object)
}

/// Compare two objects on the value `handle` extracts, under natural ordering
///
/// # Errors
///
/// See [`ArgumentComparator::compare`].
pub fn compare(handle: &ArgumentHandle, left: &Value, right: &Value) -> LambdaResult<Ordering> {
    ArgumentComparator::new(handle.clone()).compare(left, right)
}

/// Compare two objects on the value `handle` extracts, with a supplied ordering
///
/// # Errors
///
/// Returns `ChainReplayError` if either extraction fails.
pub fn compare_with<F>(handle: &ArgumentHandle, left: &Value, right: &Value, ordering: F) -> LambdaResult<Ordering>
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
{
    ArgumentComparator::new(handle.clone())
        .with_ordering(ordering)
        .compare(left, right)
}

/// Project `object` through `handle`
///
/// # Errors
///
/// Returns `ChainReplayError` when the chain does not apply to `object`.
pub fn convert(handle: &ArgumentHandle, object: &Value) -> LambdaResult<Value> {
    ArgumentConverter::new(handle.clone()).convert(object)
}
