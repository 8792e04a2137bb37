//! Ordering of objects by the value a closed chain extracts from them

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::ordering::{natural_order, nulls_first};
use crate::error::LambdaResult;
use crate::model::Value;
use crate::registry::ArgumentHandle;
use crate::replay::ReplayEngine;

/// Caller supplied ordering applied to non-null extracted values
pub type ValueOrdering = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync + 'static>;

/// Compares objects on the value an [`ArgumentHandle`] extracts from them
///
/// Nulls order before every non-null value, whatever ordering is supplied.
#[derive(Clone)]
pub struct ArgumentComparator {
    handle: ArgumentHandle,
    ordering: Option<ValueOrdering>,
    descending: bool,
}

impl ArgumentComparator {
    /// Compare under natural ordering
    #[must_use]
    pub fn new(handle: ArgumentHandle) -> Self {
        Self {
            handle,
            ordering: None,
            descending: false,
        }
    }

    /// Compare non-null values with `ordering` instead of natural ordering
    #[must_use]
    pub fn with_ordering<F>(mut self, ordering: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        self.ordering = Some(Arc::new(ordering));
        self
    }

    /// Reverse the order of non-null values; nulls stay first
    #[must_use]
    pub fn descending(mut self) -> Self {
        self.descending = !self.descending;
        self
    }

    #[must_use]
    pub fn handle(&self) -> &ArgumentHandle {
        &self.handle
    }

    /// Compare `left` and `right` on their extracted values
    ///
    /// # Errors
    ///
    /// - `ChainReplayError` if either extraction fails
    /// - `NotComparable` if natural ordering does not cover the extracted values
    pub fn compare(&self, left: &Value, right: &Value) -> LambdaResult<Ordering> {
        let chain = self.handle.chain();
        let left = ReplayEngine::evaluate(chain, left)?;
        let right = ReplayEngine::evaluate(chain, right)?;
        self.compare_extracted(&left, &right)
    }

    /// Compare two already extracted values
    ///
    /// # Errors
    ///
    /// Returns `NotComparable` if natural ordering does not cover the values.
    pub fn compare_extracted(&self, left: &Value, right: &Value) -> LambdaResult<Ordering> {
        let ordering = nulls_first(left, right, |l, r| {
            let ordering = match &self.ordering {
                Some(custom) => custom(l, r),
                None => natural_order(l, r)?,
            };
            Ok(if self.descending { ordering.reverse() } else { ordering })
        })?;

        tracing::trace!(
            target: "chainrec::adapters",
            chain = %self.handle,
            left = %left,
            right = %right,
            ?ordering,
            descending = self.descending,
            "Compared extracted values"
        );

        Ok(ordering)
    }
}

impl fmt::Debug for ArgumentComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentComparator")
            .field("handle", &self.handle)
            .field("custom_ordering", &self.ordering.is_some())
            .field("descending", &self.descending)
            .finish()
    }
}
