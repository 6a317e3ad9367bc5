// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Datasets: a named `.mtx` file, its derived properties and its size
//! category.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use graphbench_core::GraphbenchError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::PropertiesCache;
use crate::graph::Graph;
use crate::mtx::{self, MatrixData, Symmetry};

/// Type of the values stored in a dataset's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Pattern matrix, no values.
    Void,
    Int,
    Float,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Void => write!(f, "void"),
            ElementType::Int => write!(f, "int"),
            ElementType::Float => write!(f, "float"),
        }
    }
}

/// Properties derived from a dataset's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetProperties {
    pub directed: bool,
    pub element_type: ElementType,
    pub vertices: usize,
    pub edges: usize,
}

impl DatasetProperties {
    /// Compute properties from a parsed matrix.
    ///
    /// A matrix is undirected when its banner declares symmetry or when every
    /// off-diagonal entry has its mirror.
    pub fn from_matrix(matrix: &MatrixData) -> Self {
        let directed = match matrix.symmetry {
            Symmetry::Symmetric => false,
            Symmetry::General => !is_symmetric(matrix),
        };
        Self {
            directed,
            element_type: matrix.element_type,
            vertices: matrix.header.rows.max(matrix.header.cols),
            edges: matrix.header.nnz,
        }
    }

    /// Size category of the dataset, by edge count.
    pub fn size(&self) -> DatasetSize {
        DatasetSize::from_edges(self.edges)
    }
}

fn is_symmetric(matrix: &MatrixData) -> bool {
    let arcs: HashSet<(usize, usize)> = matrix
        .entries
        .iter()
        .filter(|e| e.row != e.col)
        .map(|e| (e.row, e.col))
        .collect();
    arcs.iter().all(|&(r, c)| arcs.contains(&(c, r)))
}

/// Size category of a dataset; decides how many iterations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSize {
    Tiny,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl DatasetSize {
    pub const ALL: [DatasetSize; 5] = [
        DatasetSize::Tiny,
        DatasetSize::Small,
        DatasetSize::Medium,
        DatasetSize::Large,
        DatasetSize::ExtraLarge,
    ];

    /// Inclusive upper bound on the edge count, `None` for the last bucket.
    pub fn max_edges(self) -> Option<usize> {
        match self {
            DatasetSize::Tiny => Some(5_000),
            DatasetSize::Small => Some(80_000),
            DatasetSize::Medium => Some(500_000),
            DatasetSize::Large => Some(2_000_000),
            DatasetSize::ExtraLarge => None,
        }
    }

    /// Smallest category whose bound admits `edges`.
    pub fn from_edges(edges: usize) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.max_edges().is_none_or(|max| edges <= max))
            .unwrap_or(DatasetSize::ExtraLarge)
    }
}

impl fmt::Display for DatasetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetSize::Tiny => "tiny",
            DatasetSize::Small => "small",
            DatasetSize::Medium => "medium",
            DatasetSize::Large => "large",
            DatasetSize::ExtraLarge => "extra_large",
        };
        f.write_str(name)
    }
}

/// Number of timed iterations per size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationTable {
    pub tiny: usize,
    pub small: usize,
    pub medium: usize,
    pub large: usize,
    pub extra_large: usize,
}

impl IterationTable {
    pub fn iterations(&self, size: DatasetSize) -> usize {
        match size {
            DatasetSize::Tiny => self.tiny,
            DatasetSize::Small => self.small,
            DatasetSize::Medium => self.medium,
            DatasetSize::Large => self.large,
            DatasetSize::ExtraLarge => self.extra_large,
        }
    }
}

impl Default for IterationTable {
    fn default() -> Self {
        Self {
            tiny: 50,
            small: 20,
            medium: 10,
            large: 5,
            extra_large: 2,
        }
    }
}

/// A named dataset backed by a `.mtx` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    path: PathBuf,
}

impl Dataset {
    /// Open a dataset; the file must exist.
    pub fn open(name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self, GraphbenchError> {
        let name = name.into();
        let path = path.into();
        if !path.is_file() {
            return Err(GraphbenchError::dataset(
                name,
                format!("file `{}` does not exist", path.display()),
            ));
        }
        Ok(Self { name, path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Edge count from the size line only.
    pub fn edges(&self) -> Result<usize, GraphbenchError> {
        Ok(mtx::load_header(&self.path)?.nnz)
    }

    /// Size category from the size line only.
    pub fn size(&self) -> Result<DatasetSize, GraphbenchError> {
        Ok(DatasetSize::from_edges(self.edges()?))
    }

    /// Properties from the cache, computing and caching them on a miss.
    pub fn properties(&self, cache: &mut PropertiesCache) -> Result<DatasetProperties, GraphbenchError> {
        cache.get_or_compute(&self.name, || {
            let matrix = mtx::load(&self.path)?;
            Ok(DatasetProperties::from_matrix(&matrix))
        })
    }

    /// Parse the file, derive its properties and build the graph.
    pub fn load(&self) -> Result<LoadedDataset, GraphbenchError> {
        let matrix = mtx::load(&self.path).map_err(|e| {
            GraphbenchError::dataset(&self.name, format!("cannot load `{}`: {e}", self.path.display()))
        })?;
        let properties = DatasetProperties::from_matrix(&matrix);
        let graph = Graph::from_matrix(&matrix, properties.directed);

        debug!(
            dataset = %self.name,
            vertices = properties.vertices,
            edges = properties.edges,
            directed = properties.directed,
            element_type = %properties.element_type,
            "dataset loaded"
        );

        Ok(LoadedDataset {
            name: self.name.clone(),
            properties,
            graph: Arc::new(graph),
        })
    }
}

/// A dataset held in memory and ready to benchmark.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub name: String,
    pub properties: DatasetProperties,
    pub graph: Arc<Graph>,
}

impl LoadedDataset {
    pub fn size(&self) -> DatasetSize {
        self.properties.size()
    }
}
