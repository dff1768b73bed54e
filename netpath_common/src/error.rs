//! Load-time errors.
//!
//! Every error here aborts construction: callers never receive a partially
//! built netlist.

use thiserror::Error;

/// Errors raised while reading a netlist description or building its graph.
#[derive(Debug, Error)]
pub enum NetlistError {
    /// The description is unparseable or structurally invalid.
    #[error("Malformed netlist description: {0}")]
    MalformedInput(String),

    /// A connectivity fact names an entity that was never declared.
    #[error("Connectivity references unknown vertex '{0}'")]
    UnknownVertex(String),

    /// The description source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetlistError {
    /// Create a malformed input error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create an unknown vertex error.
    pub fn unknown_vertex(name: impl Into<String>) -> Self {
        Self::UnknownVertex(name.into())
    }
}
