//! A dense, symmetric matrix of pairwise distances.

use core::ops::Index;

use distances::Number;
use serde::{Deserialize, Serialize};

use crate::utils;

use super::{LinkageError, Metric};

mod strategy;

pub use strategy::PairwiseStrategy;

/// The relative tolerance used when checking a matrix for symmetry.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense `n x n` matrix of pairwise distances, stored in row-major order.
///
/// The matrix never changes size. The agglomerators retire rows and columns by
/// filling them with `f64::INFINITY` so that index arithmetic stays fixed for
/// the whole clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    /// The number of rows, and of columns.
    cardinality: usize,
    /// The entries of the matrix.
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates an `n x n` matrix of zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            cardinality: n,
            values: vec![0.0; n * n],
        }
    }

    /// Computes the pairwise distances between the given points.
    ///
    /// # Arguments
    ///
    /// * `points` - The points to cluster. All must have the same dimensionality.
    /// * `metric` - The norm under which to measure distances.
    /// * `strategy` - How to fill the matrix. All strategies give the same result
    ///   up to floating point error.
    ///
    /// # Errors
    ///
    /// * If there are no points.
    /// * If the points do not all have the same dimensionality.
    /// * If any coordinate is `NaN` or infinite.
    /// * If any distance overflows to infinity.
    pub fn build<I, T>(points: &[I], metric: Metric, strategy: PairwiseStrategy) -> Result<Self, LinkageError>
    where
        I: AsRef<[T]> + Send + Sync,
        T: Number,
    {
        let dimensionality = validate_points(points)?;
        let n = points.len();
        ftlog::debug!("Building a {n}x{n} {metric} distance matrix of {dimensionality}-d points with the {strategy} strategy.");
        let matrix = strategy.fill(points, metric);
        if let Some(k) = matrix.values.iter().position(|d| !d.is_finite()) {
            return Err(LinkageError::InvalidInput(format!(
                "The {metric} distance between points {} and {} is not finite.",
                k / n,
                k % n
            )));
        }

        Ok(matrix)
    }

    /// Creates a matrix from the given rows.
    ///
    /// # Errors
    ///
    /// * If the rows do not form a square matrix.
    /// * If any entry is negative, `NaN` or infinite.
    /// * If the matrix is not symmetric.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinkageError> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(LinkageError::InvalidInput(format!(
                "Row {i} of the distance matrix has {} entries, but the matrix has {n} rows.",
                row.len()
            )));
        }

        let values = rows.into_iter().flatten().collect::<Vec<_>>();
        if let Some(k) = values.iter().position(|&v| !v.is_finite() || v < 0.0) {
            return Err(LinkageError::InvalidInput(format!(
                "Distance at ({}, {}) is {}. Distances must be finite and non-negative.",
                k / n,
                k % n,
                values[k]
            )));
        }

        let matrix = Self { cardinality: n, values };
        if matrix.is_symmetric(SYMMETRY_TOLERANCE) {
            Ok(matrix)
        } else {
            Err(LinkageError::InvalidInput(
                "The distance matrix is not symmetric.".to_string(),
            ))
        }
    }

    /// Returns the number of rows, i.e. the number of points.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Returns whether the matrix has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cardinality == 0
    }

    /// Returns the distance at the given row and column.
    ///
    /// # Panics
    ///
    /// * If either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.cardinality + j]
    }

    /// Sets the distance at the given row and column, and at its mirror.
    pub(crate) fn set_pair(&mut self, i: usize, j: usize, distance: f64) {
        self.values[i * self.cardinality + j] = distance;
        self.values[j * self.cardinality + i] = distance;
    }

    /// Returns a row of the matrix.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[(i * self.cardinality)..((i + 1) * self.cardinality)]
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // `chunks_exact` panics on a zero chunk size.
        self.values.chunks_exact(self.cardinality.max(1))
    }

    /// Sets every entry on the diagonal to `value`.
    pub(crate) fn fill_diagonal(&mut self, value: f64) {
        for i in 0..self.cardinality {
            self.values[i * self.cardinality + i] = value;
        }
    }

    /// Folds row and column `j` into row and column `i` under the
    /// single-linkage rule, then retires `j`.
    ///
    /// The new distance from `i` to every other index is the smaller of the old
    /// distances from `i` and from `j`. Afterwards the diagonal entry at `i` and
    /// every entry in row and column `j` are infinite.
    pub(crate) fn absorb(&mut self, i: usize, j: usize) {
        for m in 0..self.cardinality {
            if m != i && m != j {
                let d = self.get(i, m).min(self.get(j, m));
                self.set_pair(i, m, d);
            }
        }
        self.values[i * self.cardinality + i] = f64::INFINITY;
        self.retire(j);
    }

    /// Fills row and column `j` with `f64::INFINITY`.
    pub(crate) fn retire(&mut self, j: usize) {
        for m in 0..self.cardinality {
            self.set_pair(j, m, f64::INFINITY);
        }
    }

    /// Returns whether `d(i, j)` and `d(j, i)` agree within the given relative
    /// tolerance for all pairs.
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.cardinality)
            .all(|i| ((i + 1)..self.cardinality).all(|j| utils::approx_eq(self.get(i, j), self.get(j, i), tolerance)))
    }

    /// Returns whether two matrices of the same size agree entry by entry
    /// within the given relative tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.cardinality == other.cardinality
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(&a, &b)| utils::approx_eq(a, b, tolerance))
    }

    /// Returns the rows of the matrix as owned vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().take(self.cardinality).map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.values[i * self.cardinality + j]
    }
}

/// Computes the pairwise distance matrix of the given points under the L_p
/// norm of order `norm_order`.
///
/// This uses the default [`PairwiseStrategy`].
///
/// # Errors
///
/// * If `norm_order` is neither 1 nor 2.
/// * See [`DistanceMatrix::build`].
pub fn build_distance_matrix<I, T>(points: &[I], norm_order: u32) -> Result<DistanceMatrix, LinkageError>
where
    I: AsRef<[T]> + Send + Sync,
    T: Number,
{
    let metric = Metric::from_norm_order(norm_order)?;
    DistanceMatrix::build(points, metric, PairwiseStrategy::default())
}

/// Checks that the points can be clustered and returns their dimensionality.
fn validate_points<I: AsRef<[T]>, T: Number>(points: &[I]) -> Result<usize, LinkageError> {
    let dimensionality = points
        .first()
        .map(|p| p.as_ref().len())
        .ok_or_else(|| LinkageError::InvalidInput("Cannot cluster an empty set of points.".to_string()))?;

    for (i, point) in points.iter().enumerate() {
        let point = point.as_ref();
        if point.len() != dimensionality {
            return Err(LinkageError::InvalidInput(format!(
                "Point {i} has {} dimensions, but point 0 has {dimensionality}.",
                point.len()
            )));
        }
        if let Some(k) = point.iter().position(|x| !x.as_f64().is_finite()) {
            return Err(LinkageError::InvalidInput(format!(
                "Point {i} has a non-finite coordinate {} at dimension {k}.",
                point[k]
            )));
        }
    }

    Ok(dimensionality)
}
