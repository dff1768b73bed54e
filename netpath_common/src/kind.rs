//! Vertex and edge classifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of a declared signal-bearing entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VertexKind {
    /// Input port.
    InputPort,
    /// Output port.
    OutputPort,
    /// Bidirectional port.
    InoutPort,
    /// Wire or combinational variable.
    Net,
    /// Clocked storage.
    Register,
}

impl VertexKind {
    /// Input ports and registers may originate a queried path.
    pub const fn is_startpoint(self) -> bool {
        matches!(self, Self::InputPort | Self::Register)
    }

    /// Output ports and registers may terminate a queried path.
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::OutputPort | Self::Register)
    }

    /// True for registers.
    pub const fn is_register(self) -> bool {
        matches!(self, Self::Register)
    }

    /// True for any port direction.
    pub const fn is_port(self) -> bool {
        matches!(
            self,
            Self::InputPort | Self::OutputPort | Self::InoutPort
        )
    }

    /// Keyword used in descriptions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputPort => "input",
            Self::OutputPort => "output",
            Self::InoutPort => "inout",
            Self::Net => "net",
            Self::Register => "reg",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised kind keyword.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum KindError {
    /// Bad `kind` on a variable.
    #[error("unexpected vertex kind '{0}'")]
    Vertex(String),
    /// Bad `kind` on an edge.
    #[error("unexpected edge kind '{0}'")]
    Edge(String),
}

impl FromStr for VertexKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::InputPort),
            "output" => Ok(Self::OutputPort),
            "inout" => Ok(Self::InoutPort),
            "net" | "wire" | "var" => Ok(Self::Net),
            "reg" | "register" => Ok(Self::Register),
            other => Err(KindError::Vertex(other.to_string())),
        }
    }
}

/// The kind of a logic dependency between two vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Same-cycle dependency.
    #[default]
    Combinational,
    /// Dependency crossing a register's clocked boundary.
    Sequential,
}

impl EdgeKind {
    /// True for same-cycle dependencies.
    pub const fn is_combinational(self) -> bool {
        matches!(self, Self::Combinational)
    }

    /// Keyword used in descriptions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Combinational => "comb",
            Self::Sequential => "seq",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comb" | "combinational" => Ok(Self::Combinational),
            "seq" | "sequential" => Ok(Self::Sequential),
            other => Err(KindError::Edge(other.to_string())),
        }
    }
}
