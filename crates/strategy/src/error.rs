//! Error types for the strategy crate.

use thiserror::Error;

/// A strategy broke the substitutability contract.
///
/// This is a programming error in the strategy, not something a client is
/// expected to recover from; it is reported so the caller can refuse the
/// strategy or surface the bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The strategy failed for an input inside its declared domain
    #[error("strategy `{strategy}` rejected valid input {input}: {reason}")]
    RejectedValidInput {
        strategy: String,
        input: String,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ContractViolation>;
