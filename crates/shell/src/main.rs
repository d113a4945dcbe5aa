//! CLI for single-linkage hierarchical clustering.

mod config;
mod data;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use single_linkage::Clustering;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a 2-d `.npy` array of `f64` with one point per row.
    #[arg(short('i'), long)]
    inp_path: PathBuf,

    /// The distance metric.
    #[arg(short('m'), long, default_value = "euclidean")]
    metric: config::MetricArg,

    /// The agglomeration algorithm.
    #[arg(short('a'), long, default_value = "mst")]
    algorithm: config::AlgorithmArg,

    /// How to compute the distance matrix.
    #[arg(short('s'), long, default_value = "row-wise")]
    strategy: config::StrategyArg,

    /// The number of threads for the parallel strategy. Defaults to all cores.
    #[arg(short('t'), long)]
    num_threads: Option<usize>,

    /// Also print a flat clustering into this many clusters.
    #[arg(short('k'), long)]
    clusters: Option<usize>,

    /// Log every merge.
    #[arg(short('v'), long)]
    verbose: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = if args.verbose {
        ftlog::LevelFilter::Debug
    } else {
        ftlog::LevelFilter::Info
    };
    let (_guard, log_path) = utils::configure_logger("slink", level)?;
    println!("Log file: {log_path:?}");
    ftlog::info!("{args:?}");

    if let Some(num_threads) = args.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| e.to_string())?;
    }

    let inp_path = args.inp_path.canonicalize().map_err(|e| e.to_string())?;
    ftlog::info!("Input file: {inp_path:?}");

    let points = data::read_npy(&inp_path)?;
    ftlog::info!("Read {} points.", points.len());

    let clustering = Clustering::default()
        .with_metric(args.metric.into())
        .with_algorithm(args.algorithm.into())
        .with_strategy(args.strategy.into());
    let linkage = clustering.cluster(&points).map_err(|e| e.to_string())?;
    ftlog::info!("Finished clustering with {} merges.", linkage.len());

    for [left, right, distance, size] in linkage.to_rows() {
        println!("{left} {right} {distance} {size}");
    }

    if let Some(k) = args.clusters {
        let labels = linkage.flat_clusters(k).map_err(|e| e.to_string())?;
        let labels = labels.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("{}", labels.join(" "));
    }

    Ok(())
}
