use netpath_common::NetlistError;
use netpath_graph::QueryError;
use thiserror::Error;

/// Errors from loading, querying or building waypoints.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Loading or building the graph failed.
    #[error(transparent)]
    Netlist(#[from] NetlistError),
    /// A query could not be answered.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Waypoints are incomplete or were defined twice.
    #[error("Waypoint error: {0}")]
    Waypoint(String),
    /// Filesystem access failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Create a waypoint error.
    pub fn waypoint(msg: impl Into<String>) -> Self {
        Self::Waypoint(msg.into())
    }
}
