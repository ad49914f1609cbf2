//! Substitutability checks for fallible strategies.
//!
//! A strategy whose output is `Result<T, E>` conforms to its contract on a
//! domain when it returns `Ok` for every input in that domain. Two
//! strategies that both conform on the same domain can replace each other
//! without the client ever seeing a new failure there.

use crate::error::{ContractViolation, Result};
use crate::traits::Strategy;
use std::fmt::{Debug, Display};

/// Run `strategy` over every input in `domain` and report the first failure.
pub fn check_conformance<'d, I, T, E, D>(
    strategy: &dyn Strategy<I, Output = std::result::Result<T, E>>,
    domain: D,
) -> Result<()>
where
    I: Debug + ?Sized + 'd,
    E: Display,
    D: IntoIterator<Item = &'d I>,
{
    for input in domain {
        if let Err(reason) = strategy.execute(input) {
            return Err(violation(strategy.name(), input, &reason));
        }
    }
    Ok(())
}

/// Check that every strategy conforms on the same domain, i.e. that any of
/// them can stand in for any other.
pub fn verify_substitutable<I, T, E>(
    strategies: &[&dyn Strategy<I, Output = std::result::Result<T, E>>],
    domain: &[I],
) -> Result<()>
where
    I: Debug,
    E: Display,
{
    for strategy in strategies {
        check_conformance(*strategy, domain)?;
    }
    Ok(())
}

pub(crate) fn violation<I: Debug + ?Sized, E: Display>(
    strategy: &str,
    input: &I,
    reason: &E,
) -> ContractViolation {
    ContractViolation::RejectedValidInput {
        strategy: strategy.to_string(),
        input: format!("{input:?}"),
        reason: reason.to_string(),
    }
}
