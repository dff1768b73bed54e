use thiserror::Error;

/// Errors scoped to a single query. The graph stays usable after any of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Neither the exact name nor any leaf matches.
    #[error("No vertex named '{0}'")]
    NameNotFound(String),

    /// A leaf name matches more than one vertex.
    #[error("Name '{name}' is ambiguous, candidates: {}", .candidates.join(", "))]
    AmbiguousName {
        /// The query name.
        name: String,
        /// Every fully-scoped match, sorted.
        candidates: Vec<String>,
    },

    /// A loop of combinational edges through non-register vertices is
    /// reachable from `start`; `vertex` lies on it.
    #[error("Combinational cycle reachable from '{start}' through '{vertex}'")]
    CombinationalCycle {
        /// The query start point.
        start: String,
        /// A vertex on the cycle.
        vertex: String,
    },
}

impl QueryError {
    /// Create a name not found error.
    pub fn name_not_found(name: impl Into<String>) -> Self {
        Self::NameNotFound(name.into())
    }

    /// Create an ambiguous name error.
    pub fn ambiguous(name: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::AmbiguousName {
            name: name.into(),
            candidates,
        }
    }

    /// True for errors raised while resolving a name.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::NameNotFound(_) | Self::AmbiguousName { .. })
    }
}
