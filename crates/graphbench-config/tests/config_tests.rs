// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the graphbench configuration system.

use std::path::PathBuf;

use graphbench_config::diagnostic::ConfigError;
use graphbench_config::model::GraphbenchConfig;
use graphbench_config::{load_and_validate, load_and_validate_str, load_config_from_path, load_config_from_str};
use graphbench_core::{OutputFormat, ResultsPrinter};
use serial_test::serial;

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[bench]
log_level = "debug"
source_vertex = 3
output_dir = "/tmp/results"
format = "raw"
printer = "median"

[datasets]
dir = "/data/mtx"
use = ["tiny-graph"]

[[datasets.entries]]
name = "tiny-graph"
path = "/data/mtx/tiny.mtx"

[iterations]
tiny = 7

[pagerank]
damping = 0.9
tolerance = 1e-8

[plugin.plugins]
bulk = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.bench.log_level, "debug");
    assert_eq!(config.bench.source_vertex, 3);
    assert_eq!(config.bench.output_dir, PathBuf::from("/tmp/results"));
    assert_eq!(config.bench.format, OutputFormat::Raw);
    assert_eq!(config.bench.printer, ResultsPrinter::Median);
    assert_eq!(config.datasets.selected, vec!["tiny-graph"]);
    assert_eq!(config.datasets.entries.len(), 1);
    assert_eq!(
        config.datasets.resolve_path("tiny-graph"),
        PathBuf::from("/data/mtx/tiny.mtx")
    );
    assert_eq!(config.iterations.tiny, 7);
    assert_eq!(config.iterations.small, 20);
    assert_eq!(config.pagerank.damping, 0.9);
    assert_eq!(config.pagerank.max_iterations, 100);
    assert!(!config.plugin.is_enabled("bulk"));
    assert!(config.plugin.is_enabled("reference"));
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").unwrap();
    assert_eq!(config, GraphbenchConfig::default());
    assert_eq!(config.bench.output_dir, PathBuf::from("benchmarks"));
    assert_eq!(config.datasets.dir, PathBuf::from("dataset"));
    assert_eq!(config.bench.format, OutputFormat::Csv);
    assert_eq!(config.bench.printer, ResultsPrinter::All);
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let err = load_config_from_str("[benchmark]\nx = 1\n").expect_err("unknown section");
    assert!(err.to_string().contains("benchmark"));
}

#[test]
fn unknown_key_gets_a_suggestion() {
    let errors = load_and_validate_str("[bench]\nouptut_dir = \"x\"\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "ouptut_dir");
            assert_eq!(suggestion.as_deref(), Some("output_dir"));
            assert!(valid_keys.contains("printer"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn wrong_type_is_reported_with_key() {
    let errors = load_and_validate_str("[iterations]\ntiny = \"many\"\n").unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::InvalidValue { key, .. } if key == "iterations.tiny"
    )));
}

#[test]
fn unknown_format_variant_is_reported() {
    let errors = load_and_validate_str("[bench]\nformat = \"xml\"\n").unwrap_err();
    let rendered = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(rendered.contains("format") || rendered.contains("xml"), "{rendered}");
}

#[test]
fn validation_errors_pass_through() {
    let errors = load_and_validate_str("[pagerank]\ndamping = 1.5\n").unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { key, .. } if key == "pagerank.damping"
    )));
}

#[test]
fn config_error_renders_with_miette() {
    let errors = load_and_validate_str("[pagerank]\ndampnig = 0.5\n").unwrap_err();
    let handler = miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    handler.render_report(&mut out, &errors[0]).unwrap();
    assert!(out.contains("dampnig"));
    assert!(out.contains("damping"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let errors = load_and_validate(Some(std::path::Path::new("/nonexistent/graphbench.toml"))).unwrap_err();
    assert!(matches!(errors[0], ConfigError::FileNotFound { .. }));
}

#[test]
#[serial]
fn file_then_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graphbench.toml");
    std::fs::write(&path, "[bench]\noutput_dir = \"from-file\"\nsource_vertex = 1\n").unwrap();

    unsafe { std::env::set_var("GRAPHBENCH_BENCH_OUTPUT_DIR", "from-env") };
    let config = load_config_from_path(&path);
    unsafe { std::env::remove_var("GRAPHBENCH_BENCH_OUTPUT_DIR") };

    let config = config.unwrap();
    assert_eq!(config.bench.output_dir, PathBuf::from("from-env"));
    assert_eq!(config.bench.source_vertex, 1);
}

#[test]
#[serial]
fn env_override_of_nested_numeric_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graphbench.toml");
    std::fs::write(&path, "").unwrap();

    unsafe { std::env::set_var("GRAPHBENCH_PAGERANK_MAX_ITERATIONS", "42") };
    let config = load_and_validate(Some(path.as_path()));
    unsafe { std::env::remove_var("GRAPHBENCH_PAGERANK_MAX_ITERATIONS") };

    assert_eq!(config.unwrap().pagerank.max_iterations, 42);
}
