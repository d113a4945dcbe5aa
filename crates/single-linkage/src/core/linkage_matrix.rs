//! The linkage matrix encoding of a dendrogram.

use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::utils;

use super::LinkageError;

/// A single merge of two clusters.
///
/// The ids follow the usual dendrogram numbering: ids below the number of
/// points `n` are leaves, and the merge in row `k` creates the cluster with id
/// `n + k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Merge {
    /// The smaller of the two merged cluster ids.
    pub left: usize,
    /// The larger of the two merged cluster ids.
    pub right: usize,
    /// The single-linkage distance between the two clusters.
    pub distance: f64,
    /// The number of points in the merged cluster.
    pub size: usize,
}

impl Merge {
    /// Returns the merge as a row of `[left, right, distance, size]`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_row(&self) -> [f64; 4] {
        [self.left as f64, self.right as f64, self.distance, self.size as f64]
    }
}

/// A dendrogram stored as the sequence of merges that built it.
///
/// For `n` points there are exactly `n - 1` merges, and the last merge has
/// size `n`. A single point gives an empty linkage matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkageMatrix {
    /// The number of leaves.
    cardinality: usize,
    /// The merges, in the order in which they happened.
    merges: Vec<Merge>,
}

impl LinkageMatrix {
    /// Creates an empty linkage matrix for `n` leaves.
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            cardinality: n,
            merges: Vec::with_capacity(n.saturating_sub(1)),
        }
    }

    /// Records the merge of clusters `a` and `b` at the given distance and
    /// returns the id of the new cluster.
    ///
    /// The two ids may be given in either order.
    pub(crate) fn push(&mut self, a: usize, b: usize, distance: f64) -> usize {
        let (left, right) = if a < b { (a, b) } else { (b, a) };
        let size = self.cluster_size(left) + self.cluster_size(right);
        let id = self.cardinality + self.merges.len();
        ftlog::debug!("Merge {}: {left} + {right} -> {id} at {distance} with size {size}", self.merges.len());
        self.merges.push(Merge {
            left,
            right,
            distance,
            size,
        });
        id
    }

    /// The number of leaves in the dendrogram.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// The number of merges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Whether there are no merges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// The merges, in order.
    #[must_use]
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Returns the number of points in the cluster with the given id.
    ///
    /// # Panics
    ///
    /// * If `id` does not refer to a leaf or to an already recorded merge.
    #[must_use]
    pub fn cluster_size(&self, id: usize) -> usize {
        if id < self.cardinality {
            1
        } else {
            self.merges[id - self.cardinality].size
        }
    }

    /// Returns the ids of the leaves in the cluster with the given id, in
    /// ascending order.
    ///
    /// # Panics
    ///
    /// * If `id` does not refer to a leaf or to an already recorded merge.
    #[must_use]
    pub fn members(&self, id: usize) -> Vec<usize> {
        let mut leaves = Vec::with_capacity(self.cluster_size(id));
        let mut stack = vec![id];
        while let Some(c) = stack.pop() {
            if c < self.cardinality {
                leaves.push(c);
            } else {
                let merge = &self.merges[c - self.cardinality];
                stack.push(merge.left);
                stack.push(merge.right);
            }
        }
        leaves.sort_unstable();
        leaves
    }

    /// Cuts the dendrogram into `k` flat clusters by undoing its last `k - 1`
    /// merges.
    ///
    /// Returns a label for each point. Labels are numbered from zero in the
    /// order in which the clusters first appear among the points.
    ///
    /// # Errors
    ///
    /// * If `k` is zero or greater than the number of points.
    pub fn flat_clusters(&self, k: usize) -> Result<Vec<usize>, LinkageError> {
        let n = self.cardinality;
        if k == 0 || k > n {
            return Err(LinkageError::InvalidConfiguration(format!(
                "Cannot cut {n} points into {k} clusters."
            )));
        }

        let applied = &self.merges[..(n - k)];
        let mut consumed = vec![false; n + applied.len()];
        for merge in applied {
            consumed[merge.left] = true;
            consumed[merge.right] = true;
        }

        let mut root_of = vec![0; n];
        for root in (0..consumed.len()).filter(|&c| !consumed[c]) {
            for leaf in self.members(root) {
                root_of[leaf] = root;
            }
        }

        let mut label_of_root = vec![None; consumed.len()];
        let mut next_label = 0;
        let labels = root_of
            .into_iter()
            .map(|root| {
                *label_of_root[root].get_or_insert_with(|| {
                    next_label += 1;
                    next_label - 1
                })
            })
            .collect();

        Ok(labels)
    }

    /// Returns the merges as rows of `[left, right, distance, size]`.
    #[must_use]
    pub fn to_rows(&self) -> Vec<[f64; 4]> {
        self.merges.iter().map(Merge::to_row).collect()
    }

    /// Whether the merge distances never decrease from one row to the next.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.merges.windows(2).all(|w| w[0].distance <= w[1].distance)
    }

    /// Whether two linkage matrices have the same merges, with distances
    /// compared within the given relative tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.cardinality == other.cardinality
            && self.merges.len() == other.merges.len()
            && self.merges.iter().zip(other.merges.iter()).all(|(a, b)| {
                a.left == b.left
                    && a.right == b.right
                    && a.size == b.size
                    && utils::approx_eq(a.distance, b.distance, tolerance)
            })
    }
}

impl Index<usize> for LinkageMatrix {
    type Output = Merge;

    fn index(&self, row: usize) -> &Self::Output {
        &self.merges[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The dendrogram of the points `[0, 1, 5, 6]` on a line.
    fn two_pairs() -> LinkageMatrix {
        let mut linkage = LinkageMatrix::with_capacity(4);
        assert_eq!(linkage.push(1, 0, 1.0), 4);
        assert_eq!(linkage.push(2, 3, 1.0), 5);
        assert_eq!(linkage.push(5, 4, 4.0), 6);
        linkage
    }

    #[test]
    fn push() {
        let linkage = two_pairs();
        assert_eq!(
            linkage.to_rows(),
            vec![[0.0, 1.0, 1.0, 2.0], [2.0, 3.0, 1.0, 2.0], [4.0, 5.0, 4.0, 4.0]]
        );
        assert_eq!(linkage.cluster_size(3), 1);
        assert_eq!(linkage.cluster_size(6), 4);
        assert!(linkage.is_monotonic());
    }

    #[test]
    fn members() {
        let linkage = two_pairs();
        assert_eq!(linkage.members(2), vec![2]);
        assert_eq!(linkage.members(5), vec![2, 3]);
        assert_eq!(linkage.members(6), vec![0, 1, 2, 3]);
    }

    #[test]
    fn flat_clusters() -> Result<(), LinkageError> {
        let linkage = two_pairs();
        assert_eq!(linkage.flat_clusters(1)?, vec![0, 0, 0, 0]);
        assert_eq!(linkage.flat_clusters(2)?, vec![0, 0, 1, 1]);
        assert_eq!(linkage.flat_clusters(3)?, vec![0, 0, 1, 2]);
        assert_eq!(linkage.flat_clusters(4)?, vec![0, 1, 2, 3]);
        assert!(linkage.flat_clusters(0).is_err());
        assert!(linkage.flat_clusters(5).is_err());
        Ok(())
    }
}
