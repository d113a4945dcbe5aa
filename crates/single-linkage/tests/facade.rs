//! Tests for the clustering entry points.

use test_case::test_case;

use single_linkage::{cluster, Algorithm, Clustering, LinkageError, Metric, PairwiseStrategy};

mod common;

#[test_case("euclidean", "naive" ; "euclidean naive")]
#[test_case("euclidean", "MST" ; "euclidean mst")]
#[test_case("manhattan", "naive" ; "manhattan naive")]
#[test_case("Manhattan", "mst" ; "manhattan mst")]
fn two_pairs(metric: &str, algorithm: &str) -> Result<(), LinkageError> {
    // On a line, both metrics agree.
    let linkage = cluster(&common::two_pairs(), metric, algorithm)?;
    assert_eq!(
        linkage.to_rows(),
        vec![[0.0, 1.0, 1.0, 2.0], [2.0, 3.0, 1.0, 2.0], [4.0, 5.0, 4.0, 4.0]]
    );
    Ok(())
}

#[test]
fn metrics_differ() -> Result<(), LinkageError> {
    // Under L1 the diagonal neighbor is farther than under L2.
    let points = vec![vec![0.0, 0.0], vec![3.0, 3.0], vec![-4.5, 0.0]];

    let l2 = cluster(&points, "euclidean", "MST")?;
    assert_eq!(l2[0].left, 0);
    assert_eq!(l2[0].right, 1);
    assert!((l2[0].distance - 18_f64.sqrt()).abs() <= f64::EPSILON);

    let l1 = cluster(&points, "manhattan", "MST")?;
    assert_eq!(l1[0].left, 0);
    assert_eq!(l1[0].right, 2);
    assert!((l1[0].distance - 4.5).abs() <= f64::EPSILON);

    Ok(())
}

#[test]
fn configuration_errors() {
    let points = common::two_pairs();

    assert!(matches!(
        cluster(&points, "cosine", "naive"),
        Err(LinkageError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        cluster(&points, "euclidean", "ward"),
        Err(LinkageError::InvalidConfiguration(_))
    ));

    // The configuration is checked before the points.
    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        cluster(&empty, "chebyshev", "MST"),
        Err(LinkageError::InvalidConfiguration(_))
    ));
}

#[test]
fn input_errors() {
    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        cluster(&empty, "euclidean", "MST"),
        Err(LinkageError::InvalidInput(_))
    ));

    let ragged = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
    assert!(matches!(
        cluster(&ragged, "manhattan", "naive"),
        Err(LinkageError::InvalidInput(_))
    ));

    let nan = vec![vec![1.0, f64::NAN], vec![1.0, 2.0]];
    let err = cluster(&nan, "euclidean", "naive");
    assert!(matches!(err, Err(LinkageError::InvalidInput(_))));
    assert!(err.is_err_and(|e| e.to_string().starts_with("invalid input")));
}

#[test_case("euclidean", "naive" ; "euclidean naive")]
#[test_case("euclidean", "MST" ; "euclidean mst")]
#[test_case("manhattan", "naive" ; "manhattan naive")]
#[test_case("manhattan", "MST" ; "manhattan mst")]
fn overflowing_distances(metric: &str, algorithm: &str) {
    // Finite coordinates whose distances are too large for an `f64`.
    let pair = vec![vec![0.0, 0.0], vec![f64::MAX, f64::MAX]];
    let triple = vec![vec![0.0], vec![f64::MAX], vec![-f64::MAX]];

    for points in [pair, triple] {
        assert!(matches!(
            cluster(&points, metric, algorithm),
            Err(LinkageError::InvalidInput(_))
        ));
    }
}

#[test_case(Metric::Euclidean ; "euclidean")]
#[test_case(Metric::Manhattan ; "manhattan")]
fn strategies_agree(metric: Metric) -> Result<(), LinkageError> {
    let points = common::tabular(120, 6, 0.0, 100.0, 7);

    let reference = Clustering::new(metric, Algorithm::Naive)
        .with_strategy(PairwiseStrategy::Pairwise)
        .cluster(&points)?;
    common::check_linkage(&reference, points.len());

    for strategy in [PairwiseStrategy::RowWise, PairwiseStrategy::Parallel] {
        for algorithm in [Algorithm::Naive, Algorithm::Mst] {
            let linkage = Clustering::default()
                .with_metric(metric)
                .with_algorithm(algorithm)
                .with_strategy(strategy)
                .cluster(&points)?;
            assert!(linkage.approx_eq(&reference, 1e-9), "{strategy} {algorithm}");
        }
    }

    Ok(())
}

#[test]
fn defaults() {
    let clustering = Clustering::default();
    assert_eq!(clustering.metric(), Metric::Euclidean);
    assert_eq!(clustering.algorithm(), Algorithm::Mst);
    assert_eq!(clustering.strategy(), PairwiseStrategy::RowWise);

    assert_eq!("MST".parse::<Algorithm>(), Ok(Algorithm::Mst));
    assert_eq!("Naive".parse::<Algorithm>(), Ok(Algorithm::Naive));
    assert_eq!("parallel".parse::<PairwiseStrategy>(), Ok(PairwiseStrategy::Parallel));
    assert!("average".parse::<Algorithm>().is_err());
}
