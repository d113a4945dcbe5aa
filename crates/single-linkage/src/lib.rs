#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod agglomerate;
mod core;
mod facade;
pub mod utils;

pub use agglomerate::{build_mst, cluster_mst, cluster_naive, Agglomerator, Algorithm, Edge, Mst, Naive};
pub use crate::core::{
    build_distance_matrix, DistanceMatrix, LinkageError, LinkageMatrix, Merge, Metric, PairwiseStrategy,
};
pub use facade::{cluster, Clustering};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
