//! ccl - Connected component labeling toolkit
//!
//! Labels the connected components of a binary 2-D grid with four
//! independently implemented algorithms that all induce the same
//! partition:
//!
//! - Raster two-pass with equivalence resolution
//! - Direct disjoint-set union
//! - Kruskal's minimum-spanning-forest formulation
//! - Prim-style breadth-first frontier growth
//!
//! # Example
//!
//! ```
//! use ccl::{GrayGrid, label::{Algorithm, Connectivity}};
//!
//! let mut grid = GrayGrid::new(6, 6).unwrap();
//! grid.set(0, 0, 255).unwrap();
//! grid.set(0, 1, 255).unwrap();
//! grid.set(4, 4, 255).unwrap();
//!
//! let labels = Algorithm::Prim.label(&grid, Connectivity::Four);
//! assert_eq!(labels.count_labels(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ccl_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ccl_bench as bench;
pub use ccl_io as io;
pub use ccl_label as label;
