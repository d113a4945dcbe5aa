//! The naive agglomeration algorithm.

use crate::{DistanceMatrix, LinkageError, LinkageMatrix};

use super::Agglomerator;

/// Repeatedly merges the two closest active clusters.
///
/// Each of the `n - 1` iterations scans the whole matrix for its minimum and
/// then folds the merged row into the surviving one, for `O(n^3)` time in
/// total. The matrix is never resized. Retired rows and columns are filled
/// with infinity instead.
pub struct Naive;

impl Agglomerator for Naive {
    fn name(&self) -> &str {
        "naive"
    }

    fn agglomerate(&self, mut matrix: DistanceMatrix) -> Result<LinkageMatrix, LinkageError> {
        super::check_non_empty(&matrix)?;

        let n = matrix.cardinality();
        ftlog::info!("Starting naive agglomeration of {n} points.");

        matrix.fill_diagonal(f64::INFINITY);

        // The cluster held at each position. `None` once the position is retired.
        let mut cluster_mapping = (0..n).map(Some).collect::<Vec<_>>();
        let mut linkage = LinkageMatrix::with_capacity(n);

        for _ in 1..n {
            let (i, j, distance) = find_minimum(&matrix).ok_or_else(|| {
                LinkageError::InvalidInput("Every remaining pair of clusters is at an infinite distance.".to_string())
            })?;
            let (a, b) = cluster_mapping[i]
                .zip(cluster_mapping[j])
                .unwrap_or_else(|| unreachable!("Retired positions have infinite distances."));

            let id = linkage.push(a, b, distance);
            cluster_mapping[i] = Some(id);
            cluster_mapping[j] = None;

            matrix.absorb(i, j);
        }

        ftlog::info!("Finished naive agglomeration of {n} points.");
        Ok(linkage)
    }
}

/// Finds the smallest finite distance above the diagonal.
///
/// Rows are scanned in increasing order and, within a row, columns in
/// increasing order. The first occurrence of the minimum wins, so among tied
/// entries the one with the lowest row, and then the lowest column, is chosen.
///
/// Returns `None` when every entry above the diagonal is infinite.
fn find_minimum(matrix: &DistanceMatrix) -> Option<(usize, usize, f64)> {
    let mut minimum: Option<(usize, usize, f64)> = None;
    for (i, row) in matrix.rows().enumerate().take(matrix.cardinality()) {
        for (j, &d) in row.iter().enumerate().skip(i + 1) {
            if d < minimum.map_or(f64::INFINITY, |(_, _, m)| m) {
                minimum = Some((i, j, d));
            }
        }
    }
    minimum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_ties() -> Result<(), LinkageError> {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 3.0, 1.0, 1.0],
            vec![3.0, 0.0, 1.0, 2.0],
            vec![1.0, 1.0, 0.0, 1.0],
            vec![1.0, 2.0, 1.0, 0.0],
        ])?;
        assert_eq!(find_minimum(&matrix), Some((0, 2, 1.0)));
        Ok(())
    }

    #[test]
    fn minimum_skips_retired() -> Result<(), LinkageError> {
        let mut matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 4.0],
            vec![1.0, 0.0, 2.0],
            vec![4.0, 2.0, 0.0],
        ])?;
        matrix.fill_diagonal(f64::INFINITY);
        assert_eq!(find_minimum(&matrix), Some((0, 1, 1.0)));

        matrix.absorb(0, 1);
        assert_eq!(find_minimum(&matrix), Some((0, 2, 2.0)));

        matrix.absorb(0, 2);
        assert_eq!(find_minimum(&matrix), None);
        Ok(())
    }

    #[test]
    fn infinite_distances() {
        let mut matrix = DistanceMatrix::zeros(2);
        matrix.set_pair(0, 1, f64::INFINITY);
        assert!(matches!(Naive.agglomerate(matrix), Err(LinkageError::InvalidInput(_))));
    }
}
