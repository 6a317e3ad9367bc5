// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary dataset and output directories for end-to-end tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Undirected path 0-1-2-3 without values.
pub const PATH_MTX: &str = "\
%%MatrixMarket matrix coordinate pattern symmetric
4 4 3
2 1
3 2
4 3
";

/// Undirected triangle 0-1-2 with a weighted pendant edge to 3.
pub const WEIGHTED_MTX: &str = "\
%%MatrixMarket matrix coordinate integer symmetric
4 4 4
2 1 3
3 1 1
3 2 1
4 3 5
";

/// Owns a temp directory with a `dataset/` and an `out/` sub-directory.
/// Everything is removed on drop.
pub struct TestHarness {
    root: TempDir,
}

impl TestHarness {
    pub fn new() -> std::io::Result<Self> {
        let root = TempDir::new()?;
        std::fs::create_dir(root.path().join("dataset"))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn dataset_dir(&self) -> PathBuf {
        self.root.path().join("dataset")
    }

    /// Where summaries should be dumped; not created up front.
    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Write `contents` to `dataset/<name>.mtx` and return its path.
    pub fn write_dataset(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dataset_dir().join(format!("{name}.mtx"));
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Sub-directories created under the output directory, sorted, without
    /// the `recent` link.
    pub fn dumps(&self) -> std::io::Result<Vec<PathBuf>> {
        let out = self.output_dir();
        if !out.exists() {
            return Ok(Vec::new());
        }
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(out)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}
