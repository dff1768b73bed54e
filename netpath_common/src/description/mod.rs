//! Structural netlist descriptions.
//!
//! A description is an XML document holding a scope hierarchy, per-scope
//! variable declarations, and connectivity. Connectivity is given either as
//! explicit `<edge>` facts or derived from Verilator-style assignment
//! statements and logic blocks. Reading produces a flat list of
//! [`DeclaredEntity`] values and a list of [`ConnectivityFact`] values; graph
//! level checks are left to the graph builder.

mod reader;
mod xml;

use std::path::Path;

use contracts::debug_requires;
use tracing::info;

use crate::{EdgeKind, NetlistError, VertexKind};

/// A declared variable, port or register with its fully-scoped name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredEntity {
    /// Fully-scoped, dot-separated name.
    pub name: String,
    /// Kind after register promotion.
    pub kind: VertexKind,
    /// Bit width, when the description provides one.
    pub width: Option<u32>,
    /// Source location, when the description provides one.
    pub location: Option<String>,
}

impl DeclaredEntity {
    /// Entity with no width or location.
    #[debug_requires(!name.as_ref().is_empty())]
    pub fn new<S>(name: S, kind: VertexKind) -> Self
    where
        S: AsRef<str> + Into<String>,
    {
        Self {
            name: name.into(),
            kind,
            width: None,
            location: None,
        }
    }

    /// Sets the bit width.
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the source location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A directed dependency between two declared entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectivityFact {
    /// Fully-scoped name of the driving entity.
    pub driver: String,
    /// Fully-scoped name of the driven entity.
    pub driven: String,
    /// Combinational or sequential.
    pub kind: EdgeKind,
}

impl ConnectivityFact {
    /// Fact that `driver` drives `driven`.
    pub fn new(driver: impl Into<String>, driven: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            driver: driver.into(),
            driven: driven.into(),
            kind,
        }
    }
}

/// Parser output: entities in document order and deduplicated facts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetlistDescription {
    /// Names of the scopes directly under the document root.
    pub top_scopes: Vec<String>,
    /// Declared entities in document order.
    pub entities: Vec<DeclaredEntity>,
    /// Connectivity facts, without duplicates.
    pub facts: Vec<ConnectivityFact>,
}

impl NetlistDescription {
    /// The top-level instance name when the design has exactly one.
    pub fn single_top(&self) -> Option<&str> {
        match self.top_scopes.as_slice() {
            [top] => Some(top.as_str()),
            _ => None,
        }
    }
}

/// Parse a description held in memory.
pub fn parse_description_str(text: &str) -> Result<NetlistDescription, NetlistError> {
    let root = xml::parse_tree(text)?;
    let description = reader::DescriptionReader::new().read(&root)?;
    info!(
        "Parsed netlist description: {} entities, {} facts",
        description.entities.len(),
        description.facts.len()
    );
    Ok(description)
}

/// Read and parse a description file. The file is read once, synchronously.
pub fn read_description<P: AsRef<Path>>(path: P) -> Result<NetlistDescription, NetlistError> {
    let path = path.as_ref();
    info!("Reading netlist description: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_description_str(&text)
}
