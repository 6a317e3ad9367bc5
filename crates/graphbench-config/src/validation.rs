// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde cannot express. All errors are collected; the
//! validator never stops at the first one.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::GraphbenchConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &GraphbenchConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.bench.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(
            "bench.log_level",
            format!(
                "`{}` is not one of {}",
                config.bench.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if config.bench.output_dir.as_os_str().is_empty() {
        errors.push(ConfigError::validation("bench.output_dir", "must not be empty"));
    }

    let iterations = &config.iterations;
    for (key, value) in [
        ("iterations.tiny", iterations.tiny),
        ("iterations.small", iterations.small),
        ("iterations.medium", iterations.medium),
        ("iterations.large", iterations.large),
        ("iterations.extra_large", iterations.extra_large),
    ] {
        if value == 0 {
            errors.push(ConfigError::validation(key, "must be at least 1"));
        }
    }

    let pagerank = &config.pagerank;
    if !(pagerank.damping > 0.0 && pagerank.damping < 1.0) {
        errors.push(ConfigError::validation(
            "pagerank.damping",
            format!("must be in (0, 1), got {}", pagerank.damping),
        ));
    }
    if pagerank.tolerance.is_nan() || pagerank.tolerance <= 0.0 {
        errors.push(ConfigError::validation(
            "pagerank.tolerance",
            format!("must be positive, got {}", pagerank.tolerance),
        ));
    }
    if pagerank.max_iterations == 0 {
        errors.push(ConfigError::validation(
            "pagerank.max_iterations",
            "must be at least 1",
        ));
    }

    let mut seen = HashSet::new();
    for (i, entry) in config.datasets.entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            errors.push(ConfigError::validation(
                format!("datasets.entries[{i}].name"),
                "must not be empty",
            ));
        } else if !seen.insert(entry.name.as_str()) {
            errors.push(ConfigError::validation(
                "datasets.entries",
                format!("duplicate dataset name `{}`", entry.name),
            ));
        }
    }

    for name in &config.datasets.selected {
        let known = config.datasets.entry(name).is_some()
            || name.ends_with(".mtx")
            || config.datasets.resolve_path(name).is_file();
        if !known {
            errors.push(ConfigError::validation(
                "datasets.use",
                format!(
                    "dataset `{name}` has no entry and `{}` does not exist",
                    config.datasets.resolve_path(name).display()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatasetEntry;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { key, .. } if key.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&GraphbenchConfig::default()).is_ok());
    }

    #[test]
    fn bad_log_level_fails() {
        let mut config = GraphbenchConfig::default();
        config.bench.log_level = "verbose".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "log_level"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = GraphbenchConfig::default();
        config.bench.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_iterations_fail() {
        let mut config = GraphbenchConfig::default();
        config.iterations.medium = 0;
        config.iterations.extra_large = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_error(&errors, "iterations.medium"));
    }

    #[test]
    fn damping_bounds() {
        for damping in [0.0, 1.0, -0.5, f64::NAN] {
            let mut config = GraphbenchConfig::default();
            config.pagerank.damping = damping;
            let errors = validate_config(&config).unwrap_err();
            assert!(has_error(&errors, "pagerank.damping"), "damping {damping}");
        }
    }

    #[test]
    fn non_positive_tolerance_fails() {
        let mut config = GraphbenchConfig::default();
        config.pagerank.tolerance = 0.0;
        assert!(has_error(&validate_config(&config).unwrap_err(), "tolerance"));
    }

    #[test]
    fn duplicate_and_empty_dataset_names_fail() {
        let mut config = GraphbenchConfig::default();
        config.datasets.entries.push(DatasetEntry {
            name: "Journals".into(),
            path: None,
            url: None,
        });
        config.datasets.entries.push(DatasetEntry {
            name: " ".into(),
            path: None,
            url: None,
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "datasets.entries"));
        assert!(has_error(&errors, "datasets.entries[6].name"));
    }

    #[test]
    fn unknown_selected_dataset_fails() {
        let mut config = GraphbenchConfig::default();
        config.datasets.selected = vec!["missing-one".into(), "graph.mtx".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(has_error(&errors, "datasets.use"));
    }

    #[test]
    fn selected_dataset_found_on_disk_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("local.mtx"), "1 1 0\n").unwrap();
        let mut config = GraphbenchConfig::default();
        config.datasets.dir = dir.path().to_path_buf();
        config.datasets.selected = vec!["local".into()];
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn errors_are_collected() {
        let mut config = GraphbenchConfig::default();
        config.bench.log_level = "loud".into();
        config.bench.output_dir = "".into();
        config.pagerank.max_iterations = 0;
        assert_eq!(validate_config(&config).unwrap_err().len(), 3);
    }
}
