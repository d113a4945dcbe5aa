//! The entry points that go from points to a linkage matrix.

use distances::Number;
use serde::{Deserialize, Serialize};

use crate::{Algorithm, DistanceMatrix, LinkageError, LinkageMatrix, Metric, PairwiseStrategy};

/// The configuration of a clustering run.
///
/// This only selects and wires together the components. All of the
/// clustering work happens in the distance matrix builder and the
/// agglomerators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Clustering {
    /// The norm used to measure distances between points.
    metric: Metric,
    /// The agglomeration algorithm.
    algorithm: Algorithm,
    /// How the distance matrix is filled.
    strategy: PairwiseStrategy,
}

impl Clustering {
    /// Creates a new configuration.
    #[must_use]
    pub const fn new(metric: Metric, algorithm: Algorithm) -> Self {
        Self {
            metric,
            algorithm,
            strategy: PairwiseStrategy::RowWise,
        }
    }

    /// Sets the metric.
    #[must_use]
    pub const fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the agglomeration algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the strategy for building the distance matrix.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: PairwiseStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The metric.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// The agglomeration algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The strategy for building the distance matrix.
    #[must_use]
    pub const fn strategy(&self) -> PairwiseStrategy {
        self.strategy
    }

    /// Clusters the given points.
    ///
    /// # Errors
    ///
    /// * If there are no points.
    /// * If the points do not all have the same dimensionality.
    /// * If any coordinate is `NaN` or infinite.
    pub fn cluster<I, T>(&self, points: &[I]) -> Result<LinkageMatrix, LinkageError>
    where
        I: AsRef<[T]> + Send + Sync,
        T: Number,
    {
        ftlog::info!(
            "Clustering {} points with the {} algorithm under the {} metric.",
            points.len(),
            self.algorithm,
            self.metric
        );
        let matrix = DistanceMatrix::build(points, self.metric, self.strategy)?;
        self.algorithm.agglomerate(matrix)
    }
}

/// Clusters the given points with a metric and an algorithm named by strings.
///
/// The metric is one of `"euclidean"` or `"manhattan"`, and the algorithm is
/// one of `"naive"` or `"MST"`. Names are case-insensitive. The names are
/// checked before the points.
///
/// # Errors
///
/// * If the metric or the algorithm is unknown.
/// * See [`Clustering::cluster`].
pub fn cluster<I, T>(points: &[I], metric: &str, algorithm: &str) -> Result<LinkageMatrix, LinkageError>
where
    I: AsRef<[T]> + Send + Sync,
    T: Number,
{
    let metric = metric.parse::<Metric>()?;
    let algorithm = algorithm.parse::<Algorithm>()?;
    Clustering::new(metric, algorithm).cluster(points)
}
