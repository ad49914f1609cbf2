//! # Navigation Crate
//!
//! A client of the strategy crate: a [`Traveler`] that plots routes with
//! whichever navigation strategy it currently holds.
//!
//! ## Components
//!
//! - **route**: `Leg` (input), `Route` (output tagged with its `Method`)
//! - **strategies**: lensatic compass, map and GPS implementations
//! - **traveler**: the client holding a `StrategySlot`
//!
//! ## Example Usage
//!
//! ```ignore
//! use navigation::{Traveler, LensaticCompass, Gps};
//!
//! let mut traveler = Traveler::new(LensaticCompass);
//! println!("{}", traveler.travel("Argentina", "US")?);
//!
//! traveler.set_strategy(Gps);
//! println!("{}", traveler.travel("Argentina", "US")?);
//! ```

pub mod error;
pub mod route;
pub mod strategies;
pub mod traveler;

pub use error::{NavigationError, Result};
pub use route::{Leg, Method, Route};
pub use strategies::{Gps, LensaticCompass, MapReading, NavigationOutcome};
pub use traveler::Traveler;
