// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for registration, argument capture and plan dispatch.

use std::sync::Arc;

use graphbench_core::{BenchmarkKind, ExitStatus, GraphbenchError, OutputFormat, ResultsPrinter};
use graphbench_engine::{BenchmarkEngine, DatasetSpec, RunPlan};
use graphbench_graph::cache::PROPERTIES_FILE;
use graphbench_plugin::{PluginDescriptor, builtin_catalog};
use graphbench_test_utils::{
    PATH_MTX, TestHarness, WEIGHTED_MTX, failing_plugin, mock_plugin, picky_plugin,
};
use serial_test::serial;

fn harness_with_datasets() -> (TestHarness, Vec<DatasetSpec>) {
    let harness = TestHarness::new().unwrap();
    let weighted = harness.write_dataset("weighted", WEIGHTED_MTX).unwrap();
    let path = harness.write_dataset("path", PATH_MTX).unwrap();
    let datasets = vec![
        DatasetSpec::new("weighted", weighted),
        DatasetSpec::new("path", path),
    ];
    (harness, datasets)
}

fn plan_for(harness: &TestHarness, datasets: Vec<DatasetSpec>) -> RunPlan {
    RunPlan::new(harness.output_dir())
        .with_datasets(datasets)
        .with_iterations(2)
}

// --- registry behaviour ---

#[test]
fn alpha_and_beta_end_to_end() {
    let mut engine = BenchmarkEngine::new();
    engine
        .register(mock_plugin("alpha", &[BenchmarkKind::Bfs]))
        .unwrap();
    engine
        .register(mock_plugin("beta", &[BenchmarkKind::PageRank]))
        .unwrap();

    assert_eq!(engine.run(["run"]), ExitStatus::SUCCESS);

    let alpha = engine.plugin("alpha").expect("alpha registered");
    let beta = engine.plugin("beta").expect("beta registered");
    assert!(alpha.bfs().is_some());
    assert!(alpha.page_rank().is_none());
    assert!(beta.page_rank().is_some());
    assert!(beta.bfs().is_none());
    for kind in [BenchmarkKind::Sssp, BenchmarkKind::Tc, BenchmarkKind::Cc] {
        assert!(alpha.benchmark(kind).is_none());
        assert!(beta.benchmark(kind).is_none());
    }
}

#[test]
fn duplicate_name_keeps_latest() {
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("dup", &[BenchmarkKind::Bfs])).unwrap();
    engine.register(mock_plugin("dup", &[BenchmarkKind::Tc])).unwrap();

    assert_eq!(engine.registry().len(), 1);
    let plugin = engine.plugin("dup").unwrap();
    assert!(plugin.tc().is_some());
    assert!(plugin.bfs().is_none());
}

#[test]
fn distinct_names_are_all_kept() {
    let mut engine = BenchmarkEngine::new();
    for name in ["c", "a", "b"] {
        engine.register(mock_plugin(name, &[BenchmarkKind::Cc])).unwrap();
    }
    assert_eq!(engine.registry().names(), ["a", "b", "c"]);
}

#[test]
fn empty_name_is_rejected_and_registry_unchanged() {
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("keep", &[])).unwrap();

    let err = engine.register(PluginDescriptor::new("  ", "blank")).unwrap_err();
    assert!(matches!(err, GraphbenchError::EmptyPluginName));
    assert_eq!(engine.registry().names(), ["keep"]);
}

#[test]
fn descriptor_without_factories_supports_nothing() {
    let plugin = PluginDescriptor::new("bare", "no benchmarks");
    assert!(plugin.bfs().is_none());
    assert!(plugin.sssp().is_none());
    assert!(plugin.tc().is_none());
    assert!(plugin.cc().is_none());
    assert!(plugin.page_rank().is_none());
    assert!(plugin.supported_kinds().is_empty());
}

#[test]
fn arguments_are_captured_verbatim() {
    let mut engine = BenchmarkEngine::new();
    engine.parse(["prog", "--bfs", "graph.bin"]);
    assert_eq!(engine.options(), ["prog", "--bfs", "graph.bin"]);
    assert!(engine.plan().is_none());
}

#[test]
#[serial]
fn instance_is_shared_across_threads() {
    let first = BenchmarkEngine::instance() as *const _ as usize;
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| BenchmarkEngine::instance() as *const _ as usize))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), first);
    }

    {
        let mut engine = BenchmarkEngine::instance().lock().unwrap();
        engine.register(mock_plugin("shared", &[BenchmarkKind::Cc])).unwrap();
    }
    let engine = BenchmarkEngine::instance().lock().unwrap();
    assert!(engine.plugin("shared").is_some());
}

// --- plan dispatch ---

#[test]
fn builtin_plugins_write_csv_summary() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    for descriptor in builtin_catalog() {
        engine.register(descriptor).unwrap();
    }
    engine.set_plan(plan_for(&harness, datasets));

    assert_eq!(engine.run(["graphbench", "run"]), ExitStatus::SUCCESS);

    let dumps = harness.dumps().unwrap();
    assert_eq!(dumps.len(), 1);
    for kind in BenchmarkKind::ALL {
        let csv = std::fs::read_to_string(dumps[0].join(format!("{kind}.csv"))).unwrap();
        assert!(csv.starts_with("dataset,bulk,reference\n"), "{kind}: {csv}");
    }

    // SSSP needs edge values, so the pattern-only dataset is skipped.
    let sssp = std::fs::read_to_string(dumps[0].join("sssp.csv")).unwrap();
    assert_eq!(sssp.lines().count(), 2);
    assert!(sssp.contains("weighted,"));
    let bfs = std::fs::read_to_string(dumps[0].join("bfs.csv")).unwrap();
    assert_eq!(bfs.lines().count(), 3);
}

#[test]
fn raw_summary_with_selected_plugin_and_algorithm() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &BenchmarkKind::ALL)).unwrap();
    engine.register(mock_plugin("beta", &BenchmarkKind::ALL)).unwrap();

    let mut plan = plan_for(&harness, datasets)
        .with_plugins(["beta"])
        .with_algorithms([BenchmarkKind::Cc]);
    plan.format = OutputFormat::Raw;
    plan.printer = ResultsPrinter::Median;
    engine.set_plan(plan);

    assert_eq!(engine.execute(), ExitStatus::SUCCESS);

    let raw = std::fs::read_to_string(harness.output_dir().join("recent/raw.txt")).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("algo: cc, dataset: path, plugin: beta, result: "));
    assert!(lines[1].starts_with("algo: cc, dataset: weighted, plugin: beta, result: "));
}

#[test]
fn unsupported_kind_for_named_plugin_is_usage_error() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &[BenchmarkKind::Bfs])).unwrap();
    engine.set_plan(
        plan_for(&harness, datasets)
            .with_plugins(["alpha"])
            .with_algorithms([BenchmarkKind::Bfs, BenchmarkKind::Tc]),
    );

    assert_eq!(engine.execute(), ExitStatus::USAGE);
    assert!(harness.dumps().unwrap().is_empty());
}

#[test]
fn unknown_plugin_is_usage_error() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &[BenchmarkKind::Bfs])).unwrap();
    engine.set_plan(plan_for(&harness, datasets).with_plugins(["gamma"]));
    assert_eq!(engine.execute(), ExitStatus::USAGE);
}

#[test]
fn kinds_missing_from_any_plugin_are_skipped() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &[BenchmarkKind::Bfs])).unwrap();
    engine
        .register(mock_plugin("beta", &[BenchmarkKind::Bfs, BenchmarkKind::PageRank]))
        .unwrap();
    engine.set_plan(plan_for(&harness, datasets));

    assert_eq!(engine.execute(), ExitStatus::SUCCESS);

    let dump = &harness.dumps().unwrap()[0];
    assert!(dump.join("bfs.csv").is_file());
    assert!(!dump.join("pagerank.csv").exists());
}

#[test]
fn plugin_refusing_dataset_skips_the_kind() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &[BenchmarkKind::Bfs])).unwrap();
    engine.register(picky_plugin("picky")).unwrap();
    let mut plan = plan_for(&harness, datasets);
    plan.format = OutputFormat::Raw;
    engine.set_plan(plan);

    assert_eq!(engine.execute(), ExitStatus::SUCCESS);
    let raw = std::fs::read_to_string(harness.output_dir().join("recent/raw.txt")).unwrap();
    assert!(raw.is_empty());
}

#[test]
fn failing_benchmark_still_dumps_summary() {
    let (harness, datasets) = harness_with_datasets();
    let mut engine = BenchmarkEngine::new();
    engine.register(failing_plugin("broken")).unwrap();
    engine.set_plan(plan_for(&harness, datasets));

    assert_eq!(engine.execute(), ExitStatus::FAILURE);
    assert_eq!(harness.dumps().unwrap().len(), 1);
}

#[test]
fn missing_dataset_file_is_failure() {
    let harness = TestHarness::new().unwrap();
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &[BenchmarkKind::Bfs])).unwrap();
    engine.set_plan(plan_for(
        &harness,
        vec![DatasetSpec::new("ghost", harness.dataset_dir().join("ghost.mtx"))],
    ));
    assert_eq!(engine.execute(), ExitStatus::FAILURE);
}

#[test]
fn loaded_dataset_properties_are_cached() {
    let (harness, datasets) = harness_with_datasets();
    let cache_path = harness.dataset_dir().join(PROPERTIES_FILE);
    let mut engine = BenchmarkEngine::new();
    engine.register(Arc::new(mock_plugin("alpha", &[BenchmarkKind::Cc]))).unwrap();
    let mut plan = plan_for(&harness, datasets);
    plan.properties_cache = Some(cache_path.clone());
    engine.set_plan(plan);

    assert_eq!(engine.execute(), ExitStatus::SUCCESS);

    let cache = graphbench_graph::PropertiesCache::open(&cache_path).unwrap();
    let weighted = cache.get("weighted").expect("weighted cached");
    assert!(!weighted.directed);
    assert_eq!(weighted.element_type, graphbench_graph::ElementType::Int);
    assert_eq!(cache.get("path").unwrap().edges, 3);
}

#[test]
fn properties_survive_a_later_dataset_failure() {
    let harness = TestHarness::new().unwrap();
    let weighted = harness.write_dataset("weighted", WEIGHTED_MTX).unwrap();
    let cache_path = harness.dataset_dir().join(PROPERTIES_FILE);
    let mut engine = BenchmarkEngine::new();
    engine.register(mock_plugin("alpha", &[BenchmarkKind::Cc])).unwrap();
    let mut plan = plan_for(
        &harness,
        vec![
            DatasetSpec::new("weighted", weighted),
            DatasetSpec::new("ghost", harness.dataset_dir().join("ghost.mtx")),
        ],
    );
    plan.properties_cache = Some(cache_path.clone());
    engine.set_plan(plan);

    assert_eq!(engine.execute(), ExitStatus::FAILURE);

    let cache = graphbench_graph::PropertiesCache::open(&cache_path).unwrap();
    assert!(cache.get("weighted").is_some());
    assert!(cache.get("ghost").is_none());
    let dump = &harness.dumps().unwrap()[0];
    let cc = std::fs::read_to_string(dump.join("cc.csv")).unwrap();
    assert!(cc.lines().any(|line| line.starts_with("weighted,")));
}

#[test]
fn negative_weights_fail_sssp_without_hanging() {
    let harness = TestHarness::new().unwrap();
    let negative = harness
        .write_dataset(
            "negative",
            "%%MatrixMarket matrix coordinate integer symmetric\n3 3 2\n2 1 4\n3 2 -1\n",
        )
        .unwrap();
    let mut engine = BenchmarkEngine::new();
    for descriptor in builtin_catalog() {
        engine.register(descriptor).unwrap();
    }
    engine.set_plan(
        plan_for(&harness, vec![DatasetSpec::new("negative", negative)])
            .with_algorithms(vec![BenchmarkKind::Sssp]),
    );

    assert_eq!(engine.execute(), ExitStatus::FAILURE);
    assert_eq!(harness.dumps().unwrap().len(), 1);
}
