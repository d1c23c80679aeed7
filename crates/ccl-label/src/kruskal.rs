//! Kruskal-style labeling over the adjacency graph
//!
//! The image is read as a graph: foreground pixels are vertices, adjacent
//! foreground pairs are edges of weight 1. Kruskal's minimum-spanning-forest
//! procedure (sort the edges, union their endpoints) partitions the
//! vertices into one tree per component. Since only the partition matters
//! here, no explicit forest of accepted edges is kept: every edge's
//! endpoints are unioned unconditionally, which is equivalent because
//! `union` is a no-op on already-joined sets.
//!
//! All edges carry the same weight, so the sort cannot change the final
//! partition; it is performed for fidelity to the classical algorithm. The
//! result is identical, label for label, to [`crate::union_find::label`].

use crate::connectivity::{Connectivity, preceding_neighbors};
use crate::disjoint_set::DisjointSet;
use crate::union_find::compact_from_forest;
use ccl_core::{GrayGrid, LabelGrid};

/// An adjacency between two foreground pixels, by linear index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    u: usize,
    v: usize,
    weight: u32,
}

/// Label connected components via a minimum-spanning-forest formulation.
///
/// Labels are compacted to `{1, ..., K}` in raster discovery order, exactly
/// as in the direct union-find algorithm.
pub fn label(input: &GrayGrid, connectivity: Connectivity) -> LabelGrid {
    let mut edges = build_edges(input, connectivity);

    edges.sort_by_key(|e| e.weight);

    let mut forest = DisjointSet::new(input.len());
    for edge in &edges {
        forest.union(edge.u, edge.v);
    }

    compact_from_forest(input, &mut forest)
}

/// Collect one edge per adjacent foreground pair.
///
/// Emitting edges only toward preceding neighbors keeps each pair unique
/// without a dedup step.
fn build_edges(input: &GrayGrid, connectivity: Connectivity) -> Vec<Edge> {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut edges = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let idx = input.index(row, col);
            if cells[idx] == 0 {
                continue;
            }

            for (nr, nc) in preceding_neighbors(row, col, width, height, connectivity) {
                let nidx = input.index(nr, nc);
                if cells[nidx] != 0 {
                    edges.push(Edge {
                        u: idx,
                        v: nidx,
                        weight: 1,
                    });
                }
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::union_find;
    use ccl_test::grid_from_rows;

    #[test]
    fn test_edge_count_four_way() {
        // 2x2 block: 4 adjacencies under 4-way (2 horizontal + 2 vertical)
        let grid = grid_from_rows(&[
            "xx", //
            "xx",
        ]);
        assert_eq!(build_edges(&grid, Connectivity::Four).len(), 4);
        // 8-way adds the two diagonals
        assert_eq!(build_edges(&grid, Connectivity::Eight).len(), 6);
    }

    #[test]
    fn test_no_edges_for_isolated_pixels() {
        let grid = grid_from_rows(&[
            "x.x", //
            "...", //
            "x.x",
        ]);
        assert!(build_edges(&grid, Connectivity::Four).is_empty());

        let labels = label(&grid, Connectivity::Four);
        assert_eq!(labels.count_labels(), 4);
    }

    #[test]
    fn test_matches_union_find_exactly() {
        let grid = grid_from_rows(&[
            "xx..xx", //
            ".x..x.", //
            ".xxxx.", //
            "x....x",
        ]);

        for conn in [Connectivity::Four, Connectivity::Eight] {
            let a = label(&grid, conn);
            let b = union_find::label(&grid, conn);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_full_grid_single_component() {
        let grid = grid_from_rows(&[
            "xxx", //
            "xxx", //
            "xxx",
        ]);
        let labels = label(&grid, Connectivity::Four);
        assert_eq!(labels.count_labels(), 1);
        assert!(labels.data().iter().all(|&l| l == 1));
    }
}
