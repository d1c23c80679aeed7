//! ccl-core - Grid data model for connected component labeling
//!
//! This crate provides the containers shared by the labeling algorithms
//! and their collaborators:
//!
//! - [`GrayGrid`] - 8-bit input grid (0 = background, non-zero = foreground)
//! - [`LabelGrid`] - 32-bit result grid (0 = background, positive = label)
//! - [`Error`] / [`Result`] - error type for construction and access
//!
//! # Examples
//!
//! ```
//! use ccl_core::{GrayGrid, LabelGrid};
//!
//! let mut grid = GrayGrid::new(8, 8).unwrap();
//! grid.set(3, 4, 255).unwrap();
//!
//! let labels = LabelGrid::new(grid.width(), grid.height()).unwrap();
//! assert_eq!(labels.count_labels(), 0);
//! ```

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{GrayGrid, LabelGrid};
