//! Composable filtering over in-memory collections.
//!
//! This crate provides:
//! - Specification trait: a pure, total boolean test over one item
//! - Combinators (AND/OR/NOT, n-ary All/Any) for building new
//!   specifications without touching existing ones
//! - ItemFilter: the stateless engine that applies a specification
//! - FilterPipeline for running specifications as logged stages
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Filter, ItemFilter, SpecificationExt};
//! use pipeline::specs::*;
//!
//! let spec = ColorSpecification::new(Color::Green)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! let green_and_large = ItemFilter.filter(catalog.products(), &spec);
//! ```

pub mod filter;
pub mod filter_pipeline;
pub mod specs;
pub mod traits;

// Re-export main types
pub use filter::ItemFilter;
pub use filter_pipeline::FilterPipeline;
pub use traits::{Filter, Specification, SpecificationExt};
