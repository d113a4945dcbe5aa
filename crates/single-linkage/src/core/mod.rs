//! The core types for single-linkage clustering: metrics, distance matrices,
//! linkage matrices and errors.

mod distance_matrix;
mod error;
mod linkage_matrix;
mod metric;

pub use distance_matrix::{build_distance_matrix, DistanceMatrix, PairwiseStrategy};
pub use error::LinkageError;
pub use linkage_matrix::{LinkageMatrix, Merge};
pub use metric::Metric;
