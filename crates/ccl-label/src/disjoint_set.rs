//! Disjoint-set forest over linear pixel indices
//!
//! Union by rank plus path compression give amortized near-constant-time
//! operations. `find` is iterative: call depth must not scale with
//! component size, since a single component can span millions of pixels.

/// Disjoint-set forest (union-find) with union by rank and path compression
///
/// Elements are `0..n` linear indices. Each labeling algorithm that needs a
/// forest creates its own instance; instances are never shared between
/// algorithms or across calls.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create a forest of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether the forest has zero elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of `x`'s set.
    ///
    /// Applies full path compression: every node on the walk to the root is
    /// relinked directly to the root.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`. An out-of-range element is a programming
    /// defect in the caller's index computation, not a recoverable
    /// condition.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `true` if a merge occurred, `false` if the elements were
    /// already in the same set. The lower-rank root is attached under the
    /// higher-rank root; on a rank tie, `x`'s root survives and its rank
    /// increments.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.len(), 5);
        for i in 0..5 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn test_union_merges() {
        let mut ds = DisjointSet::new(4);
        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), ds.find(1));
        assert_ne!(ds.find(0), ds.find(2));
    }

    #[test]
    fn test_union_idempotent() {
        let mut ds = DisjointSet::new(4);
        assert!(ds.union(0, 1));
        assert!(!ds.union(0, 1));
        assert!(!ds.union(1, 0));
    }

    #[test]
    fn test_transitive_merge() {
        let mut ds = DisjointSet::new(6);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(1, 2);
        let root = ds.find(0);
        for i in 1..4 {
            assert_eq!(ds.find(i), root);
        }
        assert_ne!(ds.find(4), root);
    }

    #[test]
    fn test_long_chain_compresses() {
        // A chain long enough that a recursive find would be in trouble;
        // the iterative walk must handle it and flatten it.
        let n = 200_000;
        let mut ds = DisjointSet::new(n);
        for i in 1..n {
            ds.union(i - 1, i);
        }
        let root = ds.find(0);
        assert_eq!(ds.find(n - 1), root);
    }

    #[test]
    fn test_rank_tie_keeps_first_root() {
        let mut ds = DisjointSet::new(2);
        ds.union(0, 1);
        // Both rank 0 before the merge: element 0's root survives
        assert_eq!(ds.find(1), 0);
    }
}
