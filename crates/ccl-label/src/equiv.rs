//! Provisional-label equivalence table
//!
//! The raster two-pass algorithm mints provisional labels during its first
//! scan and records here which of them turned out to name the same
//! component. Unlike [`crate::DisjointSet`], the union policy is not
//! rank-based: the larger root is always attached under the smaller, so
//! `find` returns the minimum label of the class and the resolved numbering
//! stays monotonic with the scan order in which components were first
//! encountered. The two structures are intentionally separate types; their
//! invariants serve different correctness goals.

/// Equivalence table over provisional labels
///
/// Index 0 is reserved as the background sentinel and is never a valid
/// label. Labels are minted densely starting at 1.
#[derive(Debug, Clone)]
pub struct EquivalenceTable {
    parent: Vec<i32>,
}

impl EquivalenceTable {
    /// Create an empty table holding only the background sentinel.
    pub fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Number of entries, including the sentinel.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether any label has been minted yet.
    pub fn is_empty(&self) -> bool {
        self.parent.len() == 1
    }

    /// Mint a fresh provisional label.
    ///
    /// The new label equals the table size before the call, so labels come
    /// out as 1, 2, 3, ... Each starts as its own root.
    pub fn new_label(&mut self) -> i32 {
        let label = self.parent.len() as i32;
        self.parent.push(label);
        label
    }

    /// Find the smallest label equivalent to `label`.
    ///
    /// Applies path compression. Returns the background sentinel 0 for a
    /// non-positive or out-of-range input; a validly minted label never
    /// resolves to 0.
    pub fn find(&mut self, label: i32) -> i32 {
        if label <= 0 || label as usize >= self.parent.len() {
            return 0;
        }

        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = label;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        root
    }

    /// Record that `a` and `b` name the same component.
    ///
    /// No-op if already equivalent. Otherwise the larger root is attached
    /// under the smaller, so the minimum label of a class always survives
    /// as its representative.
    pub fn union(&mut self, a: i32, b: i32) {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return;
        }

        if root_a < root_b {
            self.parent[root_b as usize] = root_a;
        } else {
            self.parent[root_a as usize] = root_b;
        }
    }
}

impl Default for EquivalenceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_minted_densely() {
        let mut table = EquivalenceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.new_label(), 1);
        assert_eq!(table.new_label(), 2);
        assert_eq!(table.new_label(), 3);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_find_fresh_label_is_own_root() {
        let mut table = EquivalenceTable::new();
        let a = table.new_label();
        assert_eq!(table.find(a), a);
    }

    #[test]
    fn test_find_sentinel_and_out_of_range() {
        let mut table = EquivalenceTable::new();
        table.new_label();
        assert_eq!(table.find(0), 0);
        assert_eq!(table.find(-3), 0);
        assert_eq!(table.find(99), 0);
    }

    #[test]
    fn test_minimum_survives() {
        let mut table = EquivalenceTable::new();
        let a = table.new_label(); // 1
        let b = table.new_label(); // 2
        let c = table.new_label(); // 3

        table.union(b, c);
        assert_eq!(table.find(c), b);

        table.union(c, a);
        assert_eq!(table.find(a), a);
        assert_eq!(table.find(b), a);
        assert_eq!(table.find(c), a);
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut table = EquivalenceTable::new();
        let a = table.new_label();
        let b = table.new_label();
        table.union(a, b);
        table.union(b, a);
        assert_eq!(table.find(b), a);
    }

    #[test]
    fn test_long_chain_resolves_to_minimum() {
        let mut table = EquivalenceTable::new();
        let labels: Vec<i32> = (0..1000).map(|_| table.new_label()).collect();
        // Chain the labels together from the largest end down
        for pair in labels.windows(2).rev() {
            table.union(pair[0], pair[1]);
        }
        for &l in &labels {
            assert_eq!(table.find(l), 1);
        }
    }
}
