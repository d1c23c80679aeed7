//! Frontier-growth labeling
//!
//! Each component is grown outward from its first pixel in raster order,
//! in the manner of Prim's algorithm: the labeled region is the tree, and
//! every step annexes a frontier pixel adjacent to it. With all adjacencies
//! at equal cost no priority queue is needed; a plain FIFO frontier
//! (breadth-first) visits exactly the same component.
//!
//! Labels come out naturally compact: 1, 2, 3, ... in discovery order of
//! each component's first pixel, with no separate compaction pass.

use crate::connectivity::{Connectivity, neighbors};
use ccl_core::{GrayGrid, LabelGrid};
use std::collections::VecDeque;

/// Label connected components by breadth-first frontier growth.
pub fn label(input: &GrayGrid, connectivity: Connectivity) -> LabelGrid {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut labels = LabelGrid::new(width, height)
        .expect("input grid dimensions already validated");
    let mut current_label = 0i32;

    for row in 0..height {
        for col in 0..width {
            let idx = input.index(row, col);
            if cells[idx] != 0 && labels.data()[idx] == 0 {
                current_label += 1;
                grow_breadth_first(input, &mut labels, row, col, current_label, connectivity);
            }
        }
    }

    labels
}

/// Label connected components by depth-first frontier growth.
///
/// Alternate exploration order with identical termination and labeling
/// guarantees; only the visit order inside a component differs. The stack
/// is explicit: recursion would overflow on grid-scale components.
pub fn label_depth_first(input: &GrayGrid, connectivity: Connectivity) -> LabelGrid {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut labels = LabelGrid::new(width, height)
        .expect("input grid dimensions already validated");
    let mut current_label = 0i32;

    for row in 0..height {
        for col in 0..width {
            let idx = input.index(row, col);
            if cells[idx] != 0 && labels.data()[idx] == 0 {
                current_label += 1;
                grow_depth_first(input, &mut labels, row, col, current_label, connectivity);
            }
        }
    }

    labels
}

/// Expand one component from a seed through a FIFO frontier.
///
/// Pixels are labeled when pushed, so no pixel enters the frontier twice
/// and the loop terminates after visiting each component pixel once.
fn grow_breadth_first(
    input: &GrayGrid,
    labels: &mut LabelGrid,
    seed_row: u32,
    seed_col: u32,
    component_label: i32,
    connectivity: Connectivity,
) {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut frontier = VecDeque::new();
    frontier.push_back((seed_row, seed_col));
    labels.data_mut()[input.index(seed_row, seed_col)] = component_label;

    while let Some((row, col)) = frontier.pop_front() {
        for (nr, nc) in neighbors(row, col, width, height, connectivity) {
            let nidx = input.index(nr, nc);
            if cells[nidx] != 0 && labels.data()[nidx] == 0 {
                labels.data_mut()[nidx] = component_label;
                frontier.push_back((nr, nc));
            }
        }
    }
}

/// Expand one component from a seed through an explicit LIFO stack.
fn grow_depth_first(
    input: &GrayGrid,
    labels: &mut LabelGrid,
    seed_row: u32,
    seed_col: u32,
    component_label: i32,
    connectivity: Connectivity,
) {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut stack = vec![(seed_row, seed_col)];
    labels.data_mut()[input.index(seed_row, seed_col)] = component_label;

    while let Some((row, col)) = stack.pop() {
        for (nr, nc) in neighbors(row, col, width, height, connectivity) {
            let nidx = input.index(nr, nc);
            if cells[nidx] != 0 && labels.data()[nidx] == 0 {
                labels.data_mut()[nidx] = component_label;
                stack.push((nr, nc));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccl_test::grid_from_rows;

    #[test]
    fn test_labels_follow_discovery_order() {
        let grid = grid_from_rows(&[
            "x..x", //
            "....", //
            "x...",
        ]);

        let labels = label(&grid, Connectivity::Four);
        assert_eq!(labels.get(0, 0), Some(1));
        assert_eq!(labels.get(0, 3), Some(2));
        assert_eq!(labels.get(2, 0), Some(3));
        assert_eq!(labels.count_labels(), 3);
    }

    #[test]
    fn test_whole_component_labeled_before_scan_resumes() {
        // A winding component whose tail comes before later seeds in
        // raster order; the frontier must reach all of it.
        let grid = grid_from_rows(&[
            "xxxxx.x", //
            "x.....x", //
            "xxxxx.x",
        ]);

        let labels = label(&grid, Connectivity::Four);
        assert_eq!(labels.count_labels(), 2);
        assert_eq!(labels.get(2, 4), Some(1));
        assert_eq!(labels.get(0, 6), Some(2));
    }

    #[test]
    fn test_depth_first_matches_breadth_first() {
        let grid = grid_from_rows(&[
            "xx.x.", //
            ".xxx.", //
            "x...x", //
            "xx.xx",
        ]);

        for conn in [Connectivity::Four, Connectivity::Eight] {
            let bfs = label(&grid, conn);
            let dfs = label_depth_first(&grid, conn);
            assert_eq!(bfs, dfs);
        }
    }

    #[test]
    fn test_large_component_no_overflow() {
        // One solid component far beyond any safe recursion depth
        let grid = {
            let mut g = ccl_core::GrayGrid::new(500, 500).unwrap();
            g.fill(255);
            g
        };

        let labels = label_depth_first(&grid, Connectivity::Eight);
        assert_eq!(labels.count_labels(), 1);
    }

    #[test]
    fn test_eight_way_diagonal_chain() {
        let grid = grid_from_rows(&[
            "x...", //
            ".x..", //
            "..x.", //
            "...x",
        ]);

        assert_eq!(label(&grid, Connectivity::Four).count_labels(), 4);
        assert_eq!(label(&grid, Connectivity::Eight).count_labels(), 1);
    }
}
