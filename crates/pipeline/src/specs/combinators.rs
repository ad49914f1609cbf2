//! Combinators that build new specifications out of existing ones.
//!
//! Every combinator owns its children (by value or boxed), so a composite
//! can never outlive the predicates it was built from. Children may be
//! composites themselves, to any depth.
//!
//! ## Empty composition
//! - [`All`] with no children is vacuously **true**
//! - [`Any`] with no children is vacuously **false**

use crate::traits::Specification;

/// Logical AND of two specifications. `second` is skipped when `first` fails.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for And<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.first.describe(), self.second.describe())
    }
}

/// Logical OR of two specifications. `second` is skipped when `first` holds.
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for Or<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} OR {})", self.first.describe(), self.second.describe())
    }
}

/// Negation of a specification.
#[derive(Debug, Clone)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<T, A> Specification<T> for Not<A>
where
    T: ?Sized,
    A: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.inner.describe())
    }
}

/// Conjunction over any number of boxed specifications.
///
/// Evaluates children in insertion order and stops at the first failure.
/// An empty `All` is satisfied by every item.
pub struct All<T: ?Sized + 'static> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized + 'static> All<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a child (builder pattern).
    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn push(&mut self, spec: Box<dyn Specification<T>>) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized + 'static> Default for All<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> FromIterator<Box<dyn Specification<T>>> for All<T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Specification<T>>>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized + 'static> Specification<T> for All<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }

    fn describe(&self) -> String {
        if self.specs.is_empty() {
            return "TRUE".to_string();
        }
        join_described(&self.specs, " AND ")
    }
}

/// Disjunction over any number of boxed specifications.
///
/// Evaluates children in insertion order and stops at the first match.
/// An empty `Any` is satisfied by no item.
pub struct Any<T: ?Sized + 'static> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized + 'static> Any<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a child (builder pattern).
    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn push(&mut self, spec: Box<dyn Specification<T>>) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized + 'static> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> FromIterator<Box<dyn Specification<T>>> for Any<T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Specification<T>>>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized + 'static> Specification<T> for Any<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }

    fn describe(&self) -> String {
        if self.specs.is_empty() {
            return "FALSE".to_string();
        }
        join_described(&self.specs, " OR ")
    }
}

fn join_described<T: ?Sized + 'static>(specs: &[Box<dyn Specification<T>>], sep: &str) -> String {
    let parts: Vec<String> = specs.iter().map(|spec| spec.describe()).collect();
    format!("({})", parts.join(sep))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::predicate;
    use crate::traits::SpecificationExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn even() -> impl Specification<i32> {
        predicate("even", |n: &i32| n % 2 == 0)
    }

    fn positive() -> impl Specification<i32> {
        predicate("positive", |n: &i32| *n > 0)
    }

    #[test]
    fn test_and_or_not() {
        let both = even().and(positive());
        let either = even().or(positive());
        let odd = even().not();

        assert!(both.is_satisfied(&4));
        assert!(!both.is_satisfied(&-4));
        assert!(either.is_satisfied(&-4));
        assert!(either.is_satisfied(&3));
        assert!(!either.is_satisfied(&-3));
        assert!(odd.is_satisfied(&3));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let counted = predicate("counted", move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let spec = even().and(counted);
        assert!(!spec.is_satisfied(&3));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(spec.is_satisfied(&2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let counted = predicate("counted", move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        let spec = even().or(counted);
        assert!(spec.is_satisfied(&2));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_composition_convention() {
        let all: All<i32> = All::new();
        let any: Any<i32> = Any::new();

        assert!(all.is_satisfied(&7));
        assert!(!any.is_satisfied(&7));
        assert_eq!(all.describe(), "TRUE");
        assert_eq!(any.describe(), "FALSE");
    }

    #[test]
    fn test_nary_combinators_nest() {
        let small = predicate("small", |n: &i32| n.abs() < 10);
        let all = All::new().with(even()).with(positive()).with(small);
        let any = Any::new().with(all).with(predicate("minus one", |n: &i32| *n == -1));

        assert!(any.is_satisfied(&4));
        assert!(any.is_satisfied(&-1));
        assert!(!any.is_satisfied(&12));
        assert_eq!(any.describe(), "((even AND positive AND small) OR minus one)");
    }

    #[test]
    fn test_describe_nested() {
        let spec = even().and(positive().not());
        assert_eq!(spec.describe(), "(even AND NOT positive)");
    }

    #[test]
    fn test_collect_into_all() {
        let all: All<i32> = vec![even().boxed(), positive().boxed()]
            .into_iter()
            .collect();
        assert_eq!(all.len(), 2);
        assert!(all.is_satisfied(&8));
        assert!(!all.is_satisfied(&7));
    }
}
