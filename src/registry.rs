//! Lookup of tensor maps by name.

use crate::config::TensorMapConfig;
use crate::error::{Result, TensorMapError};
use crate::tensor_map::TensorMap;
use crate::variant;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A set of validated tensor maps keyed by name.
///
/// Every map is checked with [`TensorMap::validate`] on registration, so a
/// registry never holds a categorical map whose channel map disagrees with
/// its shape.
#[derive(Clone, Debug, Default)]
pub struct TensorMapRegistry {
    maps: BTreeMap<String, TensorMap>,
}

impl TensorMapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in variant maps.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for tm in variant::all()? {
            registry.register(tm)?;
        }
        Ok(registry)
    }

    /// Registry built from a JSON array of [`TensorMapConfig`]s.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let configs: Vec<TensorMapConfig> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for config in configs {
            registry.register(config.into_tensor_map())?;
        }
        Ok(registry)
    }

    /// Same as [`from_json_str`](Self::from_json_str), reading from a file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Add a tensor map.
    ///
    /// # Errors
    /// - [`TensorMapError::InvalidTensorMap`] if validation fails
    /// - [`TensorMapError::DuplicateTensorMap`] if the name is taken
    pub fn register(&mut self, tm: TensorMap) -> Result<()> {
        tm.validate()?;
        if self.maps.contains_key(tm.name()) {
            return Err(TensorMapError::DuplicateTensorMap(tm.name().to_string()));
        }
        debug!(
            name = tm.name(),
            interpretation = %tm.interpretation(),
            shape = ?tm.shape(),
            "registered tensor map"
        );
        self.maps.insert(tm.name().to_string(), tm);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TensorMap> {
        self.maps.get(name)
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<&TensorMap> {
        self.get(name)
            .ok_or_else(|| TensorMapError::UnknownTensorMap(name.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.maps.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
