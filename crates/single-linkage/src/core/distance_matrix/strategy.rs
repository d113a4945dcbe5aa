//! Interchangeable strategies for filling a `DistanceMatrix`.

use core::{fmt::Display, str::FromStr};

use distances::Number;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{LinkageError, Metric};

use super::DistanceMatrix;

/// How the pairwise distances are computed.
///
/// Every strategy computes each unordered pair once and mirrors it, so the
/// resulting matrices agree with each other up to floating point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PairwiseStrategy {
    /// A double loop over the upper triangle, one pair at a time.
    Pairwise,
    /// One point against all later points, one row at a time.
    #[default]
    RowWise,
    /// The rows of the upper triangle are computed in parallel with `rayon`.
    Parallel,
}

impl PairwiseStrategy {
    /// The name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::RowWise => "row-wise",
            Self::Parallel => "parallel",
        }
    }

    /// Fills a new matrix with the distances between the given points.
    ///
    /// The points are assumed to have been validated.
    pub(crate) fn fill<I, T>(self, points: &[I], metric: Metric) -> DistanceMatrix
    where
        I: AsRef<[T]> + Send + Sync,
        T: Number,
    {
        match self {
            Self::Pairwise => pairwise(points, metric),
            Self::RowWise => row_wise(points, metric),
            Self::Parallel => parallel(points, metric),
        }
    }
}

impl Display for PairwiseStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PairwiseStrategy {
    type Err = LinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pairwise" => Ok(Self::Pairwise),
            "row-wise" | "rowwise" => Ok(Self::RowWise),
            "parallel" => Ok(Self::Parallel),
            _ => Err(LinkageError::InvalidConfiguration(format!(
                "Unknown pairwise strategy {s:?}. Expected \"pairwise\", \"row-wise\" or \"parallel\"."
            ))),
        }
    }
}

/// Computes one pair at a time.
fn pairwise<I: AsRef<[T]>, T: Number>(points: &[I], metric: Metric) -> DistanceMatrix {
    let n = points.len();
    let mut matrix = DistanceMatrix::zeros(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let d = metric.distance(points[i].as_ref(), points[j].as_ref());
            matrix.set_pair(i, j, d);
        }
    }
    matrix
}

/// Distances from the point at `i` to every later point.
fn tail_distances<I: AsRef<[T]>, T: Number>(points: &[I], i: usize, metric: Metric) -> Vec<f64> {
    let a = points[i].as_ref();
    points[(i + 1)..]
        .iter()
        .map(|b| metric.distance(a, b.as_ref()))
        .collect()
}

/// Computes one row of the upper triangle at a time.
fn row_wise<I: AsRef<[T]>, T: Number>(points: &[I], metric: Metric) -> DistanceMatrix {
    let n = points.len();
    let mut matrix = DistanceMatrix::zeros(n);
    for i in 0..n {
        let tail = tail_distances(points, i, metric);
        scatter(&mut matrix, i, &tail);
    }
    matrix
}

/// Computes the rows of the upper triangle in parallel.
///
/// Each task owns the buffer for its own row, so no synchronization is needed
/// until the rows are copied into the matrix.
fn parallel<I, T>(points: &[I], metric: Metric) -> DistanceMatrix
where
    I: AsRef<[T]> + Send + Sync,
    T: Number,
{
    let n = points.len();
    let tails = (0..n)
        .into_par_iter()
        .map(|i| tail_distances(points, i, metric))
        .collect::<Vec<_>>();

    let mut matrix = DistanceMatrix::zeros(n);
    for (i, tail) in tails.iter().enumerate() {
        scatter(&mut matrix, i, tail);
    }
    matrix
}

/// Writes the distances from `i` to all later points into row and column `i`.
fn scatter(matrix: &mut DistanceMatrix, i: usize, tail: &[f64]) {
    for (offset, &d) in tail.iter().enumerate() {
        matrix.set_pair(i, i + 1 + offset, d);
    }
}
