// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Datasets and graph kernels for graphbench.
//!
//! Reads Matrix Market coordinate files, derives and caches dataset
//! properties, builds an immutable CSR [`Graph`] and provides the algorithm
//! kernels the built-in plugins are made of.

pub mod algorithms;
pub mod cache;
pub mod dataset;
pub mod graph;
pub mod mtx;

pub use cache::PropertiesCache;
pub use dataset::{
    Dataset, DatasetProperties, DatasetSize, ElementType, IterationTable, LoadedDataset,
};
pub use graph::Graph;
pub use mtx::MatrixData;
