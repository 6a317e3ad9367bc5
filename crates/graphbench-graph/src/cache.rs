// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-backed cache of dataset properties.
//!
//! Computing directedness or the element type requires a full parse, so the
//! results are kept in `properties.json` next to the datasets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use graphbench_core::GraphbenchError;
use tracing::debug;

use crate::dataset::DatasetProperties;

/// File name of the cache inside the dataset directory.
pub const PROPERTIES_FILE: &str = "properties.json";

/// Dataset name -> properties, optionally persisted to a JSON file.
#[derive(Debug, Default)]
pub struct PropertiesCache {
    path: Option<PathBuf>,
    entries: BTreeMap<String, DatasetProperties>,
    dirty: bool,
}

impl PropertiesCache {
    /// A cache that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the cache file; a missing file yields an empty cache.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GraphbenchError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                GraphbenchError::Internal(format!(
                    "corrupt properties cache `{}`: {e}",
                    path.display()
                ))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            entries,
            dirty: false,
        })
    }

    /// Open `properties.json` inside `dir`.
    pub fn open_in(dir: &Path) -> Result<Self, GraphbenchError> {
        Self::open(dir.join(PROPERTIES_FILE))
    }

    pub fn get(&self, name: &str) -> Option<DatasetProperties> {
        self.entries.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, properties: DatasetProperties) {
        let name = name.into();
        if self.entries.get(&name) != Some(&properties) {
            self.entries.insert(name, properties);
            self.dirty = true;
        }
    }

    /// Cached value for `name`, or compute, store and return it.
    pub fn get_or_compute<F>(&mut self, name: &str, compute: F) -> Result<DatasetProperties, GraphbenchError>
    where
        F: FnOnce() -> Result<DatasetProperties, GraphbenchError>,
    {
        if let Some(cached) = self.get(name) {
            return Ok(cached);
        }
        let properties = compute()?;
        self.insert(name, properties);
        Ok(properties)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the cache if it changed and has a backing file.
    pub fn save(&mut self) -> Result<(), GraphbenchError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| GraphbenchError::Internal(format!("cannot serialize properties: {e}")))?;
        std::fs::write(path, json)?;
        self.dirty = false;

        debug!(path = %path.display(), entries = self.entries.len(), "properties cache saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ElementType;

    fn props(edges: usize) -> DatasetProperties {
        DatasetProperties {
            directed: true,
            element_type: ElementType::Int,
            vertices: 10,
            edges,
        }
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PropertiesCache::open_in(dir.path()).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = PropertiesCache::open_in(dir.path()).unwrap();
        cache.insert("a", props(3));
        cache.insert("b", props(7));
        cache.save().unwrap();

        let reopened = PropertiesCache::open_in(dir.path()).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.get("b"), Some(props(7)));
    }

    #[test]
    fn get_or_compute_only_computes_once() {
        let mut cache = PropertiesCache::in_memory();
        let mut calls = 0;
        for _ in 0..3 {
            let value = cache
                .get_or_compute("x", || {
                    calls += 1;
                    Ok(props(1))
                })
                .unwrap();
            assert_eq!(value, props(1));
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROPERTIES_FILE), "not json").unwrap();
        assert!(PropertiesCache::open_in(dir.path()).is_err());
    }
}
