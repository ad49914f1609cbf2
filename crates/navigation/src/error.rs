//! Error types for the navigation crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A leg endpoint was blank; no strategy accepts such a leg
    #[error("Missing waypoint: {field} is empty")]
    EmptyWaypoint { field: &'static str },

    /// The strategy could not plot a route for this leg
    #[error("Cannot reach {to} from {from}: {reason}")]
    Unreachable {
        from: String,
        to: String,
        reason: String,
    },

    /// Method name not recognised
    #[error("Unknown navigation method: {0} (expected compass, map or gps)")]
    UnknownMethod(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, NavigationError>;
