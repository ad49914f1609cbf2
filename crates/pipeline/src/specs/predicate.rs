//! Closure-backed specifications.

use crate::traits::Specification;
use std::fmt;

/// A named closure used as a specification.
pub struct FnSpecification<F> {
    name: String,
    test: F,
}

/// Wrap `test` as a specification called `name`.
///
/// ```ignore
/// let cheap = predicate("price < 10", |p: &Item| p.price < 10);
/// ```
pub fn predicate<T, F>(name: impl Into<String>, test: F) -> FnSpecification<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    FnSpecification {
        name: name.into(),
        test,
    }
}

impl<T, F> Specification<T> for FnSpecification<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.test)(item)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

impl<F> fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpecification")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
