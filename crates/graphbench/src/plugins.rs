// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `graphbench plugins` command implementation.
//!
//! Lists every registered plugin with its status and supported algorithms.
//! `--json` prints structured output for scripting; `--plain` or a non-TTY
//! stdout disables colors.

use std::io::IsTerminal;

use graphbench_core::{BenchmarkKind, GraphbenchError};
use graphbench_plugin::PluginRegistry;
use serde::Serialize;

/// One row of the plugin listing.
#[derive(Debug, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub algorithms: Vec<BenchmarkKind>,
}

pub fn plugin_infos(registry: &PluginRegistry) -> Vec<PluginInfo> {
    registry
        .list_all()
        .into_iter()
        .map(|entry| PluginInfo {
            name: entry.name().to_string(),
            description: entry.descriptor.description().to_string(),
            enabled: entry.is_enabled(),
            algorithms: entry.descriptor.supported_kinds(),
        })
        .collect()
}

pub fn run_plugins(registry: &PluginRegistry, json: bool, plain: bool) -> Result<(), GraphbenchError> {
    let infos = plugin_infos(registry);

    if json {
        let rendered = serde_json::to_string_pretty(&infos)
            .map_err(|e| GraphbenchError::Internal(format!("cannot render plugins: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    print_table(&infos, use_color);
    Ok(())
}

fn algorithms_column(algorithms: &[BenchmarkKind]) -> String {
    if algorithms.is_empty() {
        return "-".to_string();
    }
    algorithms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_table(infos: &[PluginInfo], use_color: bool) {
    println!();
    println!("  graphbench plugins");
    println!("  {}", "-".repeat(35));

    if infos.is_empty() {
        println!("    (none registered)");
        println!();
        return;
    }

    let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
    for info in infos {
        println!("{}", plugin_row(info, width, use_color));
        println!("    {:width$}  {}", "", info.description);
    }
    println!();
}

/// Columns are padded before coloring so escape codes do not count
/// toward the width.
fn plugin_row(info: &PluginInfo, width: usize, use_color: bool) -> String {
    let name = format!("{:width$}", info.name);
    let status = format!("{:8}", if info.enabled { "enabled" } else { "disabled" });
    let algorithms = algorithms_column(&info.algorithms);
    if use_color {
        use colored::Colorize;
        let status = if info.enabled {
            status.green()
        } else {
            status.yellow()
        };
        format!("    {}  {}  {}", name.bold(), status, algorithms.cyan())
    } else {
        format!("    {name}  {status}  {algorithms}")
    }
}
