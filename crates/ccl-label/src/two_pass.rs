//! Raster two-pass labeling
//!
//! The classical approach: one forward raster scan assigns provisional
//! labels and records label equivalences, a second scan rewrites every
//! provisional label to its resolved class representative.
//!
//! The output labels are the resolved class minima and may carry gaps:
//! a provisional label that merged into a smaller one never appears in the
//! result. Callers that need a dense `1..=K` numbering should use one of
//! the other algorithms or renumber the result;
//! [`ccl_core::LabelGrid::count_labels`] counts distinct values and is not
//! affected by gaps.

use crate::connectivity::{Connectivity, preceding_neighbors};
use crate::equiv::EquivalenceTable;
use ccl_core::{GrayGrid, LabelGrid};

/// Label connected components with the two-pass algorithm.
///
/// Returns a label grid where 0 marks background and each foreground cell
/// carries the smallest provisional label of its component's equivalence
/// class.
pub fn label(input: &GrayGrid, connectivity: Connectivity) -> LabelGrid {
    let mut labels = LabelGrid::new(input.width(), input.height())
        .expect("input grid dimensions already validated");
    let mut equiv = EquivalenceTable::new();

    first_pass(input, &mut labels, &mut equiv, connectivity);
    second_pass(&mut labels, &mut equiv);

    labels
}

/// Forward raster scan: provisional labels and equivalence detection.
///
/// For each foreground cell, the labels of its already-visited foreground
/// neighbors decide the outcome: none means a fresh label, one or more
/// means the minimum of them, with an equivalence recorded for every
/// neighbor label that differs from that minimum.
fn first_pass(
    input: &GrayGrid,
    labels: &mut LabelGrid,
    equiv: &mut EquivalenceTable,
    connectivity: Connectivity,
) {
    let width = input.width();
    let height = input.height();
    let cells = input.data();

    let mut neighbor_labels: Vec<i32> = Vec::with_capacity(4);

    for row in 0..height {
        for col in 0..width {
            let idx = input.index(row, col);
            if cells[idx] == 0 {
                continue;
            }

            neighbor_labels.clear();
            for (nr, nc) in preceding_neighbors(row, col, width, height, connectivity) {
                let nidx = input.index(nr, nc);
                if cells[nidx] != 0 {
                    let neighbor_label = labels.data()[nidx];
                    if neighbor_label > 0 {
                        neighbor_labels.push(neighbor_label);
                    }
                }
            }

            if neighbor_labels.is_empty() {
                labels.data_mut()[idx] = equiv.new_label();
            } else {
                let mut min_label = neighbor_labels[0];
                for &l in &neighbor_labels[1..] {
                    if l < min_label {
                        min_label = l;
                    }
                }

                labels.data_mut()[idx] = min_label;

                for &l in &neighbor_labels {
                    if l != min_label {
                        equiv.union(min_label, l);
                    }
                }
            }
        }
    }
}

/// Resolution scan: rewrite every positive cell to its class minimum.
fn second_pass(labels: &mut LabelGrid, equiv: &mut EquivalenceTable) {
    for cell in labels.data_mut() {
        if *cell > 0 {
            *cell = equiv.find(*cell);
        }
    }
}
