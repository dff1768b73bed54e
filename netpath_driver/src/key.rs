//! Cache keys for loaded netlists.
//!
//! A `DriverKey` identifies a loaded netlist by the description file it came
//! from and the configuration it was built with. The same file loaded with
//! two configurations yields two entries.

use std::path::{Path, PathBuf};

use contracts::*;
use netpath_common::LoadConfig;

/// Identifies one cached netlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriverKey {
    /// Absolute path to the description file
    pub path: PathBuf,
    /// Configuration used for the build
    pub config: LoadConfig,
}

impl DriverKey {
    /// Key for `path` loaded with `config`.
    #[debug_requires(!path.as_ref().as_os_str().is_empty())]
    pub fn new<P>(path: P, config: LoadConfig) -> Self
    where
        P: AsRef<Path> + Into<PathBuf>,
    {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Path to the description file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configuration used for the build.
    #[must_use]
    pub const fn config(&self) -> &LoadConfig {
        &self.config
    }
}
