//! Legs to travel and the routes strategies produce for them.

use crate::error::{NavigationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A request to get from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leg {
    pub start: String,
    pub end: String,
}

impl Leg {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The precondition shared by every navigation strategy: both
    /// waypoints are non-blank.
    pub fn validate(&self) -> Result<()> {
        if self.start.trim().is_empty() {
            return Err(NavigationError::EmptyWaypoint { field: "start" });
        }
        if self.end.trim().is_empty() {
            return Err(NavigationError::EmptyWaypoint { field: "end" });
        }
        Ok(())
    }
}

/// How a route was found. Tags every [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    LensaticCompass,
    Map,
    Gps,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::LensaticCompass, Method::Map, Method::Gps];

    fn technique(&self) -> &'static str {
        match self {
            Method::LensaticCompass => "a lensatic compass for precise bearings",
            Method::Map => "a map for terrain association",
            Method::Gps => "GPS for real-time positioning",
        }
    }
}

impl FromStr for Method {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compass" | "lensatic" | "lensatic-compass" => Ok(Method::LensaticCompass),
            "map" => Ok(Method::Map),
            "gps" => Ok(Method::Gps),
            _ => Err(NavigationError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::LensaticCompass => "compass",
            Method::Map => "map",
            Method::Gps => "gps",
        };
        f.write_str(name)
    }
}

/// Result of navigating one leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub method: Method,
}

impl Route {
    pub(crate) fn plot(leg: &Leg, method: Method) -> Result<Self> {
        leg.validate()?;
        Ok(Self {
            start: leg.start.clone(),
            end: leg.end.clone(),
            method,
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Navigating from {} to {} using {}.",
            self.start,
            self.end,
            self.method.technique()
        )
    }
}
