//! Data generation and property checks shared by the integration tests.

#![allow(dead_code)]

use rand::prelude::*;
use single_linkage::LinkageMatrix;

/// Uniformly random points in `[min, max)^dim`.
pub fn tabular(car: usize, dim: usize, min: f64, max: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car)
        .map(|_| (0..dim).map(|_| rng.gen_range(min..max)).collect())
        .collect()
}

/// Random points on a small integer grid, so that many distances tie.
pub fn grid_points(car: usize, dim: usize, max: i32, seed: u64) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car)
        .map(|_| (0..dim).map(|_| rng.gen_range(0..=max)).collect())
        .collect()
}

/// The points `[0, 1, 5, 6]` on a line.
pub fn two_pairs() -> Vec<Vec<f64>> {
    vec![vec![0.0], vec![1.0], vec![5.0], vec![6.0]]
}

/// Asserts the shape and size invariants of a linkage matrix over `n` points.
pub fn check_linkage(linkage: &LinkageMatrix, n: usize) {
    assert_eq!(linkage.cardinality(), n);
    assert_eq!(linkage.len(), n.saturating_sub(1));

    let mut used = vec![false; 2 * n];
    for (k, merge) in linkage.merges().iter().enumerate() {
        assert!(merge.left < merge.right, "Row {k}: {merge:?}");
        assert!(merge.right < n + k, "Row {k} refers to a cluster not yet created: {merge:?}");
        assert!(merge.distance >= 0.0, "Row {k}: {merge:?}");
        assert_eq!(
            merge.size,
            linkage.cluster_size(merge.left) + linkage.cluster_size(merge.right),
            "Row {k}: {merge:?}"
        );
        assert!(!used[merge.left], "Cluster {} merged twice", merge.left);
        assert!(!used[merge.right], "Cluster {} merged twice", merge.right);
        used[merge.left] = true;
        used[merge.right] = true;
    }

    if let Some(last) = linkage.merges().last() {
        assert_eq!(last.size, n);
    }
    assert!(linkage.is_monotonic(), "{:?}", linkage.to_rows());
}
