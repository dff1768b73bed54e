//! Configuration for loading and querying a netlist.
//!
//! Quick examples
//!
//! Defaults (top-prefix expansion on, temporaries hidden, graph checks on):
//! ```ignore
//! use netpath_common::LoadConfig;
//! let cfg = LoadConfig::default();
//! ```
//!
//! Strict leaf-or-exact resolution without graph warnings:
//! ```ignore
//! use netpath_common::LoadConfig;
//! let cfg = LoadConfig::builder()
//!     .expand_top_prefix(false)
//!     .check_graph(false)
//!     .build();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::NetlistError;

/// Options applied when a netlist is loaded.
///
/// - expand_top_prefix:
///     - true  => a dotted query name that misses the exact map is retried
///       with the single top-level scope prepended (`u_sub.x` finds
///       `top.u_sub.x`).
///     - false => only exact and leaf-name lookups are attempted.
/// - hide_temporaries: drop Verilator temporaries from name listings.
/// - check_graph: emit warnings for suspicious graph structure after building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Retry dotted names with the single top scope prepended.
    pub expand_top_prefix: bool,
    /// Leave Verilator temporaries out of name listings.
    pub hide_temporaries: bool,
    /// Log structural warnings after building.
    pub check_graph: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            expand_top_prefix: true,
            hide_temporaries: true,
            check_graph: true,
        }
    }
}

impl LoadConfig {
    /// Builder starting from the defaults.
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, NetlistError> {
        serde_json::from_str(json)
            .map_err(|e| NetlistError::malformed(format!("invalid load configuration: {e}")))
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, NetlistError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to a JSON string.
    pub fn to_json_string(&self) -> String {
        // Plain struct of bools, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Fluent builder for [`LoadConfig`].
#[derive(Debug, Clone, Default)]
pub struct LoadConfigBuilder {
    config: LoadConfig,
}

impl LoadConfigBuilder {
    /// Sets [`LoadConfig::expand_top_prefix`].
    pub const fn expand_top_prefix(mut self, value: bool) -> Self {
        self.config.expand_top_prefix = value;
        self
    }

    /// Sets [`LoadConfig::hide_temporaries`].
    pub const fn hide_temporaries(mut self, value: bool) -> Self {
        self.config.hide_temporaries = value;
        self
    }

    /// Sets [`LoadConfig::check_graph`].
    pub const fn check_graph(mut self, value: bool) -> Self {
        self.config.check_graph = value;
        self
    }

    /// Finish building.
    pub const fn build(self) -> LoadConfig {
        self.config
    }
}
