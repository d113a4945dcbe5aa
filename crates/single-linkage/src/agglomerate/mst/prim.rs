//! Prim's algorithm over a dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::{utils, DistanceMatrix};

/// An edge of a minimum spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The vertex that was already in the tree when the edge was added.
    pub source: usize,
    /// The vertex that the edge attached to the tree.
    pub target: usize,
    /// The distance between the two vertices.
    pub weight: f64,
}

/// Builds a minimum spanning tree of the complete graph described by the
/// distance matrix, rooted at vertex 0.
///
/// This is the array-scan variant of Prim's algorithm, which takes `O(n^2)`
/// time on a dense graph. Each step attaches the unvisited vertex with the
/// cheapest edge to the tree, breaking ties by the lowest vertex index, and then
/// relaxes the costs of the remaining unvisited vertices through it.
///
/// Returns the `n - 1` edges ordered by their target vertex. The diagonal of the
/// matrix is never read.
#[must_use]
pub fn build_mst(matrix: &DistanceMatrix) -> Vec<Edge> {
    let n = matrix.cardinality();
    if n < 2 {
        return Vec::new();
    }

    let mut cost = vec![f64::INFINITY; n];
    cost[0] = 0.0;
    // Every vertex starts out attached to the root, so that an infinite edge
    // still joins the tree.
    let mut previous = vec![0; n];
    // Kept in ascending order so that ties go to the lowest index.
    let mut unvisited = (0..n).collect::<Vec<_>>();

    while unvisited.len() > 1 {
        let costs = unvisited.iter().map(|&v| cost[v]).collect::<Vec<_>>();
        let (position, _) =
            utils::arg_min(&costs).unwrap_or_else(|| unreachable!("There are unvisited vertices."));
        let m = unvisited.remove(position);

        for &v in &unvisited {
            let d = matrix.get(m, v);
            if d < cost[v] {
                cost[v] = d;
                previous[v] = m;
            }
        }
    }

    (1..n)
        .map(|target| Edge {
            source: previous[target],
            target,
            weight: cost[target],
        })
        .collect()
}
