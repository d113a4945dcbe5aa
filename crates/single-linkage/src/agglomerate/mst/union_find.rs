//! A disjoint-set forest over the points being merged.

/// A union-find with path halving and union by rank.
///
/// This replaces rewriting every entry of a point-to-cluster map on each merge.
/// The caller keeps the cluster id of each root, so the ids and the order of
/// the linkage rows are unaffected.
pub struct UnionFind {
    /// The parent of each element. Roots are their own parents.
    parent: Vec<usize>,
    /// An upper bound on the height of the tree under each root.
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the root of the set containing `x`, pointing each visited
    /// element at its grandparent along the way.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets with the given roots and returns the new root.
    ///
    /// On equal ranks the lower root wins.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        if a == b {
            return a;
        }
        let (root, child) = if self.rank[a] >= self.rank[b] { (a, b) } else { (b, a) };
        self.parent[child] = root;
        if self.rank[root] == self.rank[child] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        root
    }
}
