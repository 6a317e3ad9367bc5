// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for graphbench.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and diagnostic
//! error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use graphbench_config::load_and_validate;
//!
//! let config = load_and_validate(None).expect("config errors");
//! println!("datasets in {}", config.datasets.dir.display());
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::GraphbenchConfig;

/// Load configuration and validate it.
///
/// With `path`, only that file (plus env overrides) is read and it must
/// exist; otherwise the XDG hierarchy is used. Figment errors become miette
/// diagnostics with typo suggestions.
pub fn load_and_validate(path: Option<&Path>) -> Result<GraphbenchConfig, Vec<ConfigError>> {
    let loaded = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(vec![ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }]);
            }
            loader::load_config_from_path(path)
        }
        None => loader::load_config(),
    };

    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = collect_toml_sources(path);
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<GraphbenchConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Contents of every config file that may have contributed, for spans.
fn collect_toml_sources(explicit: Option<&Path>) -> Vec<(String, String)> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let local = std::env::current_dir()
                .map(|d| d.join(loader::LOCAL_CONFIG))
                .unwrap_or_else(|_| loader::LOCAL_CONFIG.into());
            let mut paths = vec![local];
            paths.extend(loader::user_config_path());
            paths.push(loader::SYSTEM_CONFIG.into());
            paths
        }
    };

    candidates
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path.display().to_string(), content))
        })
        .collect()
}
