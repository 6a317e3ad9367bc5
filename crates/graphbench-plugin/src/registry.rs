// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry keyed by plugin name.
//!
//! The `PluginRegistry` stores `PluginEntry` records: a shared descriptor and
//! a status. Entries are never removed; registering a name again replaces
//! the previous entry.

use std::collections::HashMap;
use std::sync::Arc;

use graphbench_core::GraphbenchError;
use tracing::{info, warn};

use crate::descriptor::PluginDescriptor;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin takes part in runs.
    Enabled,
    /// Plugin is registered but disabled in configuration.
    Disabled,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single entry in the plugin registry.
#[derive(Debug, Clone)]
pub struct PluginEntry {
    pub descriptor: Arc<PluginDescriptor>,
    pub status: PluginStatus,
}

impl PluginEntry {
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn is_enabled(&self) -> bool {
        self.status == PluginStatus::Enabled
    }
}

/// Registry of named plugins.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    entries: HashMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin with status `Enabled`.
    pub fn register(&mut self, plugin: impl Into<Arc<PluginDescriptor>>) -> Result<(), GraphbenchError> {
        self.register_with_status(plugin, PluginStatus::Enabled)
    }

    /// Register a plugin with an explicit status.
    ///
    /// Fails with `EmptyPluginName` for a blank name and leaves the registry
    /// unchanged. A duplicate name overwrites the earlier entry.
    pub fn register_with_status(
        &mut self,
        plugin: impl Into<Arc<PluginDescriptor>>,
        status: PluginStatus,
    ) -> Result<(), GraphbenchError> {
        let descriptor = plugin.into();
        let name = descriptor.name().to_string();
        if name.trim().is_empty() {
            return Err(GraphbenchError::EmptyPluginName);
        }

        info!("Register plugin \"{name}\"");
        let previous = self.entries.insert(name.clone(), PluginEntry { descriptor, status });
        if previous.is_some() {
            warn!(plugin = %name, "plugin registered twice, keeping the latest");
        }
        Ok(())
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.get(name)
    }

    /// Shared descriptor of the named plugin.
    pub fn plugin(&self, name: &str) -> Option<Arc<PluginDescriptor>> {
        self.entries.get(name).map(|e| Arc::clone(&e.descriptor))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All enabled plugins, sorted by name.
    pub fn get_enabled(&self) -> Vec<&PluginEntry> {
        self.list_all().into_iter().filter(|e| e.is_enabled()).collect()
    }

    /// List all plugin entries, sorted by name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.list_all().iter().map(|e| e.name().to_string()).collect()
    }

    /// Toggle a plugin's enabled status.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), GraphbenchError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| GraphbenchError::PluginNotFound {
                name: name.to_string(),
            })?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
