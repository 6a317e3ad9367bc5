// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./graphbench.toml` > `~/.config/graphbench/graphbench.toml`
//! > `/etc/graphbench/graphbench.toml` with environment variable overrides via
//! the `GRAPHBENCH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use crate::model::GraphbenchConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG: &str = "/etc/graphbench/graphbench.toml";

/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG: &str = "graphbench.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHBENCH_";

/// Top-level sections, used to map `GRAPHBENCH_<SECTION>_<KEY>` to `section.key`.
const SECTIONS: [&str; 5] = ["bench", "datasets", "iterations", "pagerank", "plugin"];

/// `~/.config/graphbench/graphbench.toml`, when a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("graphbench").join(LOCAL_CONFIG))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/graphbench/graphbench.toml` (system-wide)
/// 3. `~/.config/graphbench/graphbench.toml` (user XDG config)
/// 4. `./graphbench.toml` (local directory)
/// 5. `GRAPHBENCH_*` environment variables
pub fn load_config() -> Result<GraphbenchConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<GraphbenchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GraphbenchConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<GraphbenchConfig, figment::Error> {
    debug!(path = %path.display(), "loading configuration file");
    Figment::new()
        .merge(Serialized::defaults(GraphbenchConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(GraphbenchConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// `GRAPHBENCH_BENCH_OUTPUT_DIR` must become `bench.output_dir`, not
/// `bench.output.dir`, so only the first underscore after a known section
/// name turns into a dot.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env key to a lowercase dotted config path.
///
/// figment hands the key over in its original case.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
