//! # Domain Crate
//!
//! Example payload types for the filtering and strategy crates.
//!
//! ## Main Components
//!
//! - **types**: `Product` with its `Color` and `Size` traits
//! - **parser**: parse `name::color::size` catalog files
//! - **catalog**: ordered, uniquely named product collection
//! - **units**: squad units that carry a resource pool by composition
//! - **gear**: rifle/compass/radio behind narrow capability traits
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use domain::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/inventory.cat"))?;
//! for product in &catalog {
//!     println!("{product}");
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod gear;
pub mod parser;
pub mod types;
pub mod units;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{DomainError, Result};
pub use gear::{Capability, Gear};
pub use types::{Color, Product, Size};
pub use units::{Actor, Mobile, ResourcePool, Role, Unit, Usage, perform_mission};
