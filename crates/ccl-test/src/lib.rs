//! ccl-test - Regression test framework for the ccl workspace
//!
//! Provides the shared pieces the workspace's `tests/` directories rely on:
//!
//! - [`RegParams`] / [`RegTestMode`] - indexed check tracking with a final
//!   pass/fail summary, in the style of classical regression suites
//! - [`grid_from_rows`] - compact text fixtures for binary grids
//! - [`same_partition`] - label-numbering-independent partition equality
//!
//! # Usage
//!
//! ```
//! use ccl_test::{RegParams, grid_from_rows};
//!
//! let grid = grid_from_rows(&["x.", ".x"]);
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(2.0, 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use ccl_core::{GrayGrid, LabelGrid};

/// Build a binary grid from text rows.
///
/// Each string is one row; `.` is background (0), any other character is
/// foreground (255). All rows must have the same, non-zero length.
///
/// # Panics
///
/// Panics on an empty or ragged fixture. Fixtures are literals written
/// next to the test; a malformed one is a bug in the test itself.
pub fn grid_from_rows(rows: &[&str]) -> GrayGrid {
    assert!(!rows.is_empty(), "fixture has no rows");
    let width = rows[0].len() as u32;
    let height = rows.len() as u32;

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        assert_eq!(
            row.len() as u32,
            width,
            "fixture rows must all have length {}",
            width
        );
        for ch in row.chars() {
            data.push(if ch == '.' { 0 } else { 255 });
        }
    }

    GrayGrid::from_data(width, height, data).expect("fixture dimensions validated above")
}

/// Check whether two label grids induce the same partition.
///
/// The grids are equivalent when they agree on which cells are background
/// and there is a bijection between their positive label values: cells
/// sharing a label in one grid share a label in the other, and vice versa.
/// Label numbering is free to differ.
pub fn same_partition(a: &LabelGrid, b: &LabelGrid) -> bool {
    if a.width() != b.width() || a.height() != b.height() {
        return false;
    }

    let mut a_to_b: std::collections::HashMap<i32, i32> = std::collections::HashMap::new();
    let mut b_to_a: std::collections::HashMap<i32, i32> = std::collections::HashMap::new();

    for (&la, &lb) in a.data().iter().zip(b.data()) {
        if (la == 0) != (lb == 0) {
            return false;
        }
        if la == 0 {
            continue;
        }

        match a_to_b.get(&la) {
            Some(&mapped) if mapped != lb => return false,
            None => {
                a_to_b.insert(la, lb);
            }
            _ => {}
        }
        match b_to_a.get(&lb) {
            Some(&mapped) if mapped != la => return false,
            None => {
                b_to_a.insert(lb, la);
            }
            _ => {}
        }
    }

    true
}
