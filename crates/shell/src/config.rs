//! Command-line names for the clustering configuration.

use single_linkage::{Algorithm, Metric, PairwiseStrategy};

/// The available distance metrics.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum MetricArg {
    #[clap(name = "euclidean")]
    Euclidean,
    #[clap(name = "manhattan")]
    Manhattan,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Euclidean => Self::Euclidean,
            MetricArg::Manhattan => Self::Manhattan,
        }
    }
}

/// The available agglomeration algorithms.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum AlgorithmArg {
    #[clap(name = "naive")]
    Naive,
    #[clap(name = "mst")]
    Mst,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Naive => Self::Naive,
            AlgorithmArg::Mst => Self::Mst,
        }
    }
}

/// The available strategies for computing the distance matrix.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum StrategyArg {
    #[clap(name = "pairwise")]
    Pairwise,
    #[clap(name = "row-wise")]
    RowWise,
    #[clap(name = "parallel")]
    Parallel,
}

impl From<StrategyArg> for PairwiseStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Pairwise => Self::Pairwise,
            StrategyArg::RowWise => Self::RowWise,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}
