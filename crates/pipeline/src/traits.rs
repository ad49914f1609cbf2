//! Core traits for the filtering pipeline.
//!
//! This module defines the Specification trait (a single-item predicate)
//! and the Filter trait that applies one to a sequence of items.

use crate::specs::{And, Not, Or};
use std::sync::Arc;

/// A boolean test over one item.
///
/// ## Design Note
/// - `is_satisfied` must be pure: same item, same answer, no side effects
/// - It must be total; return `false` rather than panic on odd input
/// - `Send + Sync` lets one specification be shared by filters running on
///   several threads
pub trait Specification<T: ?Sized>: Send + Sync {
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human readable form, used for logging.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Fluent combinators for any specification.
///
/// ```ignore
/// let spec = ColorSpecification::new(Color::Green)
///     .and(SizeSpecification::new(Size::Large))
///     .or(NameContainsSpecification::new("house"))
///     .not();
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    fn and<S: Specification<T>>(self, other: S) -> And<Self, S> {
        And::new(self, other)
    }

    fn or<S: Specification<T>>(self, other: S) -> Or<Self, S> {
        Or::new(self, other)
    }

    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erase the concrete type, e.g. to store it in [`crate::specs::All`].
    fn boxed<'a>(self) -> Box<dyn Specification<T> + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

/// Applies a specification to a sequence of items.
///
/// Implementations keep input order, never mutate or duplicate items and
/// hold no state between calls.
pub trait Filter<T> {
    fn filter<'a, I, S>(&self, items: I, spec: &S) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
        T: 'a;
}
