//! # Strategy Crate
//!
//! Runtime-swappable algorithms behind a stable interface.
//!
//! ## Components
//!
//! - **Strategy**: the single-operation contract an algorithm implements
//! - **StrategySlot**: owns exactly one strategy, replaceable at runtime
//! - **SharedStrategySlot**: the same slot behind a read/write lock
//! - **contract**: checks that strategies are substitutable on a domain
//!
//! ## Example Usage
//!
//! ```ignore
//! use strategy::StrategySlot;
//!
//! let mut slot = StrategySlot::new(LensaticCompass);
//! let route = slot.invoke(&leg)?;
//!
//! // Client code does not change when the strategy does.
//! slot.replace(Gps);
//! let route = slot.invoke(&leg)?;
//! ```

pub mod contract;
pub mod error;
pub mod shared;
pub mod slot;
pub mod traits;

pub use contract::{check_conformance, verify_substitutable};
pub use error::{ContractViolation, Result};
pub use shared::SharedStrategySlot;
pub use slot::StrategySlot;
pub use traits::{BoxedStrategy, Strategy};
