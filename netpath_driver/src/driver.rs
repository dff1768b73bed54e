//! Shared cache of loaded netlists.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use netpath_common::LoadConfig;

use crate::{DriverError, DriverKey, NetlistPaths};

/// Cache of loaded netlists shared between threads.
///
/// Relative description paths are resolved against the root directory given
/// at construction. Loading runs outside the lock; when two threads load the
/// same key at once, the first graph inserted is kept and returned to both.
#[derive(Debug, Clone)]
pub struct Driver {
    registry: Arc<RwLock<HashMap<DriverKey, Arc<NetlistPaths>>>>,
    root_path: PathBuf,
}

impl Driver {
    /// Driver rooted at `root`, which must exist.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, DriverError> {
        Ok(Self {
            registry: Arc::new(RwLock::new(HashMap::new())),
            root_path: std::fs::canonicalize(root.as_ref())?,
        })
    }

    /// Canonical root directory.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Joins relative paths onto the root. Absolute paths pass through.
    #[must_use]
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_path.join(path)
        }
    }

    /// Get a netlist from the registry, loading it with the default
    /// configuration if necessary.
    pub fn get_or_load<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(DriverKey, Arc<NetlistPaths>), DriverError> {
        self.get_or_load_with(path, LoadConfig::default())
    }

    /// Get a netlist from the registry, loading it with `config` if necessary.
    pub fn get_or_load_with<P: AsRef<Path>>(
        &self,
        path: P,
        config: LoadConfig,
    ) -> Result<(DriverKey, Arc<NetlistPaths>), DriverError> {
        let key = DriverKey::new(self.resolve_path(path), config);

        if let Some(netlist) = self.get(&key) {
            tracing::event!(tracing::Level::DEBUG, "Driver cache hit: {:?}", key.path());
            return Ok((key, netlist));
        }

        let loaded = Arc::new(NetlistPaths::load(key.path(), key.config())?);

        let netlist = {
            let mut registry = self
                .registry
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            registry.entry(key.clone()).or_insert(loaded).clone()
        };
        tracing::event!(tracing::Level::DEBUG, "Driver cached: {:?}", key.path());
        Ok((key, netlist))
    }

    /// Get a netlist from the registry (returns None if not loaded)
    #[must_use]
    pub fn get(&self, key: &DriverKey) -> Option<Arc<NetlistPaths>> {
        let registry = self
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        registry.get(key).cloned()
    }

    /// Whether `key` is cached.
    #[must_use]
    pub fn contains(&self, key: &DriverKey) -> bool {
        self.get(key).is_some()
    }

    /// Drop a cached netlist. Handles already given out stay valid.
    pub fn evict(&self, key: &DriverKey) -> Option<Arc<NetlistPaths>> {
        let mut registry = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        registry.remove(key)
    }

    /// Keys of every cached netlist, in no particular order.
    #[must_use]
    pub fn loaded_keys(&self) -> Vec<DriverKey> {
        let registry = self
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        registry.keys().cloned().collect()
    }

    /// Number of cached netlists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
