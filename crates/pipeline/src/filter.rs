//! The filter engine.
//!
//! [`ItemFilter`] has no fields and keeps no state between calls, so a
//! single value (or a fresh one per call) can be used from any number of
//! threads on independent inputs.

use crate::traits::{Filter, Specification};
use rayon::prelude::*;

/// Applies a specification to a sequence and returns the matching items.
///
/// ## Guarantees
/// - Output keeps the relative order of the input
/// - Output holds exactly the items the specification accepts, once each
/// - Items are borrowed, never cloned or mutated
///
/// A panicking specification unwinds straight through the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter;

impl ItemFilter {
    pub fn new() -> Self {
        Self
    }

    /// Same result as [`Filter::filter`], evaluated on the rayon pool.
    pub fn par_filter<'a, T, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        T: Sync,
        S: Specification<T> + ?Sized,
    {
        items
            .par_iter()
            .filter(|item| spec.is_satisfied(item))
            .collect()
    }
}

impl<T> Filter<T> for ItemFilter {
    fn filter<'a, I, S>(&self, items: I, spec: &S) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
        T: 'a,
    {
        items
            .into_iter()
            .filter(|item| spec.is_satisfied(item))
            .collect()
    }
}
