//! Concrete navigation strategies.
//!
//! All three accept exactly the legs [`Leg::validate`] accepts and fail
//! only with [`NavigationError::EmptyWaypoint`], so any of them can stand
//! in for another.

use crate::error::NavigationError;
use crate::route::{Leg, Method, Route};
use strategy::{BoxedStrategy, Strategy};

/// What every navigation strategy returns.
pub type NavigationOutcome = Result<Route, NavigationError>;

/// Precise bearings with a lensatic compass.
#[derive(Debug, Clone, Copy, Default)]
pub struct LensaticCompass;

/// Terrain association with a paper map.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapReading;

/// Real-time positioning with GPS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gps;

impl Strategy<Leg> for LensaticCompass {
    type Output = NavigationOutcome;

    fn name(&self) -> &str {
        "lensatic-compass"
    }

    fn execute(&self, leg: &Leg) -> NavigationOutcome {
        Route::plot(leg, Method::LensaticCompass)
    }
}

impl Strategy<Leg> for MapReading {
    type Output = NavigationOutcome;

    fn name(&self) -> &str {
        "map"
    }

    fn execute(&self, leg: &Leg) -> NavigationOutcome {
        Route::plot(leg, Method::Map)
    }
}

impl Strategy<Leg> for Gps {
    type Output = NavigationOutcome;

    fn name(&self) -> &str {
        "gps"
    }

    fn execute(&self, leg: &Leg) -> NavigationOutcome {
        Route::plot(leg, Method::Gps)
    }
}

impl Method {
    /// Build the strategy for this method.
    pub fn strategy(self) -> BoxedStrategy<Leg, NavigationOutcome> {
        match self {
            Method::LensaticCompass => Box::new(LensaticCompass),
            Method::Map => Box::new(MapReading),
            Method::Gps => Box::new(Gps),
        }
    }
}
