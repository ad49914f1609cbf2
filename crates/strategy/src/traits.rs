//! The behavioral contract every strategy implements.

/// A swappable algorithm behind one operation.
///
/// Implementations of the same `Strategy<I, Output = O>` are expected to be
/// interchangeable: same accepted inputs, same output type, and no failure
/// on an input another implementation accepts. When `Output` is a
/// `Result`, [`crate::contract`] can check that on a probe domain.
///
/// `Send + Sync` lets a slot be shared behind a lock; implementations must
/// not keep hidden state shared with other implementations.
pub trait Strategy<I: ?Sized>: Send + Sync {
    type Output;

    /// Name used in logs and contract reports.
    fn name(&self) -> &str;

    fn execute(&self, input: &I) -> Self::Output;
}

/// Owned, type-erased strategy.
pub type BoxedStrategy<I, O> = Box<dyn Strategy<I, Output = O>>;

impl<I: ?Sized, S: Strategy<I> + ?Sized> Strategy<I> for Box<S> {
    type Output = S::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(&self, input: &I) -> Self::Output {
        (**self).execute(input)
    }
}
