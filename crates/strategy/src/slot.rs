//! StrategySlot: exclusive, replaceable ownership of one strategy.
//!
//! A slot always holds exactly one strategy. `replace` drops the previous
//! one and installs the new one; there is no way back to an empty slot.
//! `replace` takes `&mut self` and `invoke` takes `&self`, so the borrow
//! checker already guarantees a running `invoke` finishes against the
//! strategy it started with. Use [`crate::SharedStrategySlot`] when several
//! threads need the same slot.

use crate::contract::{check_conformance, violation};
use crate::error::ContractViolation;
use crate::traits::{BoxedStrategy, Strategy};
use std::fmt::{self, Debug, Display};
use tracing::{debug, warn};

pub struct StrategySlot<I: ?Sized, O> {
    current: BoxedStrategy<I, O>,
    generation: u64,
}

impl<I: ?Sized, O> StrategySlot<I, O> {
    pub fn new(initial: impl Strategy<I, Output = O> + 'static) -> Self {
        Self::from_boxed(Box::new(initial))
    }

    pub fn from_boxed(initial: BoxedStrategy<I, O>) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    /// Install `next`, releasing the current strategy.
    pub fn replace(&mut self, next: impl Strategy<I, Output = O> + 'static) {
        self.replace_boxed(Box::new(next));
    }

    pub fn replace_boxed(&mut self, next: BoxedStrategy<I, O>) {
        debug!(
            "Replacing strategy {} with {} (generation {})",
            self.current.name(),
            next.name(),
            self.generation + 1
        );
        self.current = next;
        self.generation += 1;
    }

    /// Delegate to the current strategy.
    pub fn invoke(&self, input: &I) -> O {
        self.current.execute(input)
    }

    pub fn strategy_name(&self) -> &str {
        self.current.name()
    }

    /// Number of replacements since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Give up the slot and take the strategy it held.
    pub fn into_inner(self) -> BoxedStrategy<I, O> {
        self.current
    }
}

impl<I, T, E> StrategySlot<I, Result<T, E>>
where
    I: Debug + ?Sized,
    E: Display,
{
    /// Replace only if `next` succeeds on every input in `domain`.
    ///
    /// On a violation the current strategy stays installed and the
    /// generation is unchanged.
    pub fn replace_verified<'d, D>(
        &mut self,
        next: impl Strategy<I, Output = Result<T, E>> + 'static,
        domain: D,
    ) -> Result<(), ContractViolation>
    where
        I: 'd,
        D: IntoIterator<Item = &'d I>,
    {
        let next: BoxedStrategy<I, Result<T, E>> = Box::new(next);
        if let Err(err) = check_conformance(next.as_ref(), domain) {
            warn!("Keeping strategy {}: {}", self.current.name(), err);
            return Err(err);
        }
        self.replace_boxed(next);
        Ok(())
    }

    /// Invoke for an input the caller knows is inside the contract domain.
    ///
    /// A failure here means the installed strategy broke the contract, so
    /// it is reported as a [`ContractViolation`] instead of the strategy's
    /// own error type.
    pub fn invoke_in_domain(&self, input: &I) -> Result<T, ContractViolation> {
        self.current
            .execute(input)
            .map_err(|reason| violation(self.current.name(), input, &reason))
    }
}

impl<I: ?Sized, O> Debug for StrategySlot<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategySlot")
            .field("strategy", &self.current.name())
            .field("generation", &self.generation)
            .finish()
    }
}
