//! Specification implementations.
//!
//! This module contains the combinators plus the concrete specifications
//! for the domain payload types. New specifications plug into any filter
//! without touching the engine.

pub mod combinators;
pub mod predicate;
pub mod product;
pub mod unit;

// Re-export for convenience
pub use combinators::{All, And, Any, Not, Or};
pub use predicate::{FnSpecification, predicate};
pub use product::{ColorSpecification, NameContainsSpecification, SizeSpecification};
pub use unit::{HasSupplies, MinHealth, RoleSpecification};
