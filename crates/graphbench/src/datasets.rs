// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `graphbench datasets` command implementation.

use std::path::PathBuf;

use graphbench_config::GraphbenchConfig;
use graphbench_core::GraphbenchError;
use graphbench_graph::{Dataset, DatasetProperties, PropertiesCache};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub name: String,
    pub path: PathBuf,
    /// Listed in `datasets.use`.
    pub selected: bool,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<DatasetProperties>,
}

/// Configured entries followed by selected names without an entry.
/// Properties come from `properties.json`, computed for present files on
/// a cache miss.
pub fn dataset_infos(config: &GraphbenchConfig) -> Result<Vec<DatasetInfo>, GraphbenchError> {
    let datasets = &config.datasets;
    let mut cache = PropertiesCache::open_in(&datasets.dir)?;

    let mut names: Vec<&str> = datasets.entries.iter().map(|e| e.name.as_str()).collect();
    for name in &datasets.selected {
        if !names.contains(&name.as_str()) {
            names.push(name);
        }
    }

    let mut infos = Vec::with_capacity(names.len());
    for name in names {
        let path = datasets.resolve_path(name);
        let present = path.is_file();
        let properties = if present {
            match Dataset::open(name, &path).and_then(|d| d.properties(&mut cache)) {
                Ok(properties) => Some(properties),
                Err(e) => {
                    warn!(dataset = name, error = %e, "cannot read dataset properties");
                    None
                }
            }
        } else {
            None
        };

        infos.push(DatasetInfo {
            name: name.to_string(),
            selected: datasets.selected.iter().any(|s| s == name),
            url: datasets.entry(name).and_then(|e| e.url.clone()),
            path,
            present,
            properties,
        });
    }

    if datasets.dir.is_dir() {
        cache.save()?;
    }
    Ok(infos)
}

pub fn run_datasets(config: &GraphbenchConfig, json: bool) -> Result<(), GraphbenchError> {
    let infos = dataset_infos(config)?;

    if json {
        let rendered = serde_json::to_string_pretty(&infos)
            .map_err(|e| GraphbenchError::Internal(format!("cannot render datasets: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    println!();
    println!("  graphbench datasets ({})", config.datasets.dir.display());
    println!("  {}", "-".repeat(35));
    let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
    for info in &infos {
        let marker = if info.selected { "*" } else { " " };
        let details = match &info.properties {
            Some(p) => format!(
                "{} vertices, {} edges, {}, {}, {}",
                p.vertices,
                p.edges,
                if p.directed { "directed" } else { "undirected" },
                p.element_type,
                p.size()
            ),
            None if info.present => "properties unavailable".to_string(),
            None => "not downloaded".to_string(),
        };
        println!("  {marker} {:width$}  {details}", info.name);
    }
    println!();
    println!("  * selected by datasets.use");
    println!();
    Ok(())
}
