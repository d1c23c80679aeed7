//! Labeling regression test
//!
//! Pins the canonical scenarios every algorithm must agree on, plus the
//! per-algorithm numbering guarantees.
//!
//! Run with:
//! ```
//! cargo test -p ccl-label --test label_reg
//! ```

use ccl_core::{GrayGrid, LabelGrid};
use ccl_label::{Algorithm, Connectivity};
use ccl_test::{RegParams, grid_from_rows};

/// Dense numbering: the set of positive labels is exactly {1..=K}.
fn assert_compact(labels: &LabelGrid, context: &str) {
    let count = labels.count_labels() as i32;
    assert_eq!(
        labels.max_label(),
        count,
        "{}: labels should be gap-free up to the component count",
        context
    );
}

fn label_all(grid: &GrayGrid, connectivity: Connectivity) -> Vec<(Algorithm, LabelGrid)> {
    Algorithm::ALL
        .iter()
        .map(|&a| (a, a.label(grid, connectivity)))
        .collect()
}

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // -----------------------------------------------------------
    // Single foreground pixel in a 3x3 grid
    // -----------------------------------------------------------
    let single = grid_from_rows(&[
        "...", //
        ".x.", //
        "...",
    ]);
    for (algorithm, labels) in label_all(&single, Connectivity::Four) {
        rp.compare_values(1.0, labels.count_labels() as f64, 0.0);
        assert_eq!(labels.get(1, 1), Some(1), "{}", algorithm);
    }

    // -----------------------------------------------------------
    // Diagonal pair: split under 4-way, joined under 8-way
    // -----------------------------------------------------------
    let diagonal = grid_from_rows(&[
        "x..", //
        ".x.", //
        "...",
    ]);
    for (_, labels) in label_all(&diagonal, Connectivity::Four) {
        rp.compare_values(2.0, labels.count_labels() as f64, 0.0);
    }
    for (_, labels) in label_all(&diagonal, Connectivity::Eight) {
        rp.compare_values(1.0, labels.count_labels() as f64, 0.0);
    }

    // -----------------------------------------------------------
    // Fully foreground 5x5 grid: one component either way
    // -----------------------------------------------------------
    let mut full = GrayGrid::new(5, 5).unwrap();
    full.fill(255);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for (_, labels) in label_all(&full, connectivity) {
            rp.compare_values(1.0, labels.count_labels() as f64, 0.0);
        }
    }

    // -----------------------------------------------------------
    // All-background grid: zero components, all-zero labels
    // -----------------------------------------------------------
    let empty = GrayGrid::new(7, 4).unwrap();
    for (algorithm, labels) in label_all(&empty, Connectivity::Four) {
        rp.compare_values(0.0, labels.count_labels() as f64, 0.0);
        assert!(
            labels.data().iter().all(|&l| l == 0),
            "{}: background must stay 0",
            algorithm
        );
    }

    // -----------------------------------------------------------
    // Two separated 2x2 blocks: two components either way, and each
    // block's cells share one label
    // -----------------------------------------------------------
    let blocks = grid_from_rows(&[
        "........", //
        ".xx..xx.", //
        ".xx..xx.", //
        "........",
    ]);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for (algorithm, labels) in label_all(&blocks, connectivity) {
            rp.compare_values(2.0, labels.count_labels() as f64, 0.0);

            let left = labels.get(1, 1).unwrap();
            let right = labels.get(1, 5).unwrap();
            assert!(left > 0 && right > 0 && left != right, "{}", algorithm);
            for (row, col) in [(1, 2), (2, 1), (2, 2)] {
                assert_eq!(labels.get(row, col), Some(left), "{}", algorithm);
            }
            for (row, col) in [(1, 6), (2, 5), (2, 6)] {
                assert_eq!(labels.get(row, col), Some(right), "{}", algorithm);
            }
        }
    }

    assert!(rp.cleanup(), "label regression test failed");
}

#[test]
fn background_fixed_point() {
    let grid = grid_from_rows(&[
        "x..xx", //
        "..x..", //
        "x...x",
    ]);

    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for (algorithm, labels) in label_all(&grid, connectivity) {
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    let foreground = grid.get(row, col).unwrap() != 0;
                    assert_eq!(
                        labels.get(row, col).unwrap() > 0,
                        foreground,
                        "{}: cell ({}, {})",
                        algorithm,
                        row,
                        col
                    );
                }
            }
        }
    }
}

#[test]
fn compacted_numbering() {
    let grid = grid_from_rows(&[
        "x.x.x.x", //
        ".......", //
        "xx..xxx",
    ]);

    // Two-pass is exempt: its output carries resolved roots, not a dense
    // range.
    for algorithm in [Algorithm::UnionFind, Algorithm::Kruskal, Algorithm::Prim] {
        let labels = algorithm.label(&grid, Connectivity::Four);
        assert_compact(&labels, algorithm.name());
    }
}

#[test]
fn two_pass_gaps_are_expected() {
    // The two arms merge: provisional label 2 collapses into 1, so the
    // resolved grid uses {1, 3}, not {1, 2}.
    let grid = grid_from_rows(&[
        "x.x.x", //
        "xxx..",
    ]);

    let labels = Algorithm::TwoPass.label(&grid, Connectivity::Four);
    assert_eq!(labels.count_labels(), 2);
    assert_eq!(labels.get(0, 0), Some(1));
    assert_eq!(labels.get(0, 2), Some(1));
    assert_eq!(labels.get(0, 4), Some(3));
    assert!(labels.max_label() > labels.count_labels() as i32);
}

#[test]
fn determinism() {
    let grid = grid_from_rows(&[
        "xx.x.x", //
        ".xxx..", //
        "x..xxx",
    ]);

    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for algorithm in Algorithm::ALL {
            let first = algorithm.label(&grid, connectivity);
            let second = algorithm.label(&grid, connectivity);
            assert_eq!(first, second, "{} must be deterministic", algorithm);
        }
    }
}

#[test]
fn visualization_preserves_membership() {
    let grid = grid_from_rows(&[
        "x.x.x", //
        ".....", //
        "xx.xx",
    ]);

    let labels = Algorithm::UnionFind.label(&grid, Connectivity::Four);
    let vis = labels.to_visualization();

    // With fewer than 255 components the mapping is injective: cells get
    // equal visualization values exactly when they share a label.
    for idx_a in 0..labels.len() {
        for idx_b in 0..labels.len() {
            let same_label = labels.data()[idx_a] == labels.data()[idx_b];
            let same_value = vis.data()[idx_a] == vis.data()[idx_b];
            assert_eq!(same_label, same_value);
        }
    }
    for (idx, &label) in labels.data().iter().enumerate() {
        assert_eq!(label == 0, vis.data()[idx] == 0);
    }
}
