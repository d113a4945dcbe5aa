//! Algorithms that agglomerate points into a single-linkage dendrogram.
//!
//! Both algorithms produce the same linkage matrix for the same distance
//! matrix. The naive algorithm is the reference against which the faster MST
//! algorithm is checked.

use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DistanceMatrix, LinkageError, LinkageMatrix};

mod mst;
mod naive;

pub use mst::{build_mst, Edge, Mst};
pub use naive::Naive;

/// An algorithm that builds a single-linkage dendrogram from a distance
/// matrix.
///
/// The agglomerator takes ownership of the distance matrix because it mutates
/// the matrix while clustering.
pub trait Agglomerator {
    /// The name of the algorithm.
    fn name(&self) -> &str;

    /// Clusters the points described by the distance matrix.
    ///
    /// # Errors
    ///
    /// * If the distance matrix is empty.
    fn agglomerate(&self, matrix: DistanceMatrix) -> Result<LinkageMatrix, LinkageError>;
}

/// The available agglomeration algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Repeatedly merges the closest pair of clusters. `O(n^3)`.
    Naive,
    /// Merges the edges of a minimum spanning tree in order. `O(n^2)`.
    #[default]
    Mst,
}

impl Algorithm {
    /// Runs the algorithm on the distance matrix.
    ///
    /// # Errors
    ///
    /// See [`Agglomerator::agglomerate`].
    pub fn agglomerate(self, matrix: DistanceMatrix) -> Result<LinkageMatrix, LinkageError> {
        match self {
            Self::Naive => Naive.agglomerate(matrix),
            Self::Mst => Mst.agglomerate(matrix),
        }
    }

    /// The name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Mst => "MST",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "mst" => Ok(Self::Mst),
            _ => Err(LinkageError::InvalidConfiguration(format!(
                "Unknown algorithm {s:?}. Expected \"naive\" or \"MST\"."
            ))),
        }
    }
}

/// Clusters with the naive `O(n^3)` algorithm.
///
/// # Errors
///
/// * If the distance matrix is empty.
pub fn cluster_naive(matrix: DistanceMatrix) -> Result<LinkageMatrix, LinkageError> {
    Naive.agglomerate(matrix)
}

/// Clusters with the `O(n^2)` minimum spanning tree algorithm.
///
/// # Errors
///
/// * If the distance matrix is empty.
pub fn cluster_mst(matrix: DistanceMatrix) -> Result<LinkageMatrix, LinkageError> {
    Mst.agglomerate(matrix)
}

/// Rejects a matrix with no points.
fn check_non_empty(matrix: &DistanceMatrix) -> Result<(), LinkageError> {
    if matrix.is_empty() {
        Err(LinkageError::InvalidInput(
            "Cannot build a hierarchy from an empty set of points.".to_string(),
        ))
    } else {
        Ok(())
    }
}
