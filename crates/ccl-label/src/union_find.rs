//! Direct union-find labeling
//!
//! The image is treated as a partition of its pixel indices: every
//! foreground pixel starts as a singleton, adjacent foreground pixels are
//! merged, and the surviving set representatives are renumbered into the
//! dense range `1..=K` in row-major discovery order.

use crate::connectivity::{Connectivity, preceding_neighbors};
use crate::disjoint_set::DisjointSet;
use ccl_core::{GrayGrid, LabelGrid};

/// Label connected components with a disjoint-set forest over pixel indices.
///
/// Labels are compacted: the set of positive labels present is exactly
/// `{1, ..., K}`, numbered by the raster order of each component's first
/// pixel.
pub fn label(input: &GrayGrid, connectivity: Connectivity) -> LabelGrid {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut forest = DisjointSet::new(input.len());

    // Union each foreground pixel with its already-visited foreground
    // neighbors; restricting to the preceding set visits every adjacent
    // pair exactly once.
    for row in 0..height {
        for col in 0..width {
            let idx = input.index(row, col);
            if cells[idx] == 0 {
                continue;
            }

            for (nr, nc) in preceding_neighbors(row, col, width, height, connectivity) {
                let nidx = input.index(nr, nc);
                if cells[nidx] != 0 {
                    forest.union(idx, nidx);
                }
            }
        }
    }

    compact_from_forest(input, &mut forest)
}

/// Renumber forest representatives into dense labels.
///
/// Scans in row-major order; the first time a representative is seen it
/// receives the next free label, so component numbering follows the
/// discovery order of each component's first pixel. Background cells are
/// written 0 without consulting the forest.
pub(crate) fn compact_from_forest(input: &GrayGrid, forest: &mut DisjointSet) -> LabelGrid {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut labels = LabelGrid::new(width, height)
        .expect("input grid dimensions already validated");
    let mut root_to_label = vec![0i32; input.len()];
    let mut next_label = 1i32;

    for row in 0..height {
        for col in 0..width {
            let idx = input.index(row, col);
            if cells[idx] == 0 {
                continue;
            }

            let root = forest.find(idx);
            if root_to_label[root] == 0 {
                root_to_label[root] = next_label;
                next_label += 1;
            }
            labels.data_mut()[idx] = root_to_label[root];
        }
    }

    labels
}
