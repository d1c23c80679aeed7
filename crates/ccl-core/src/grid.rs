//! Grid containers for labeling
//!
//! Two rectangular, row-major containers back the labeling engine:
//!
//! - [`GrayGrid`] - 8-bit cells; the binarized input. Cell 0 is background,
//!   any non-zero cell is foreground (255 after [`GrayGrid::binarize`]).
//! - [`LabelGrid`] - 32-bit signed cells; the labeling result. Cell 0 is
//!   background, positive values are component labels.
//!
//! # Cell layout
//!
//! Cells are stored in a flat vector, row-major: the cell at `(row, col)`
//! lives at index `row * width + col`. The same linear index is used by the
//! labeling algorithms wherever a flat array stands in for the 2-D grid
//! (disjoint-set forests, edge lists).

use crate::error::{Error, Result};

/// 8-bit grayscale grid
///
/// The input container for labeling. Constructed in memory or by the I/O
/// layer; read-only for the duration of a labeling call.
///
/// # Examples
///
/// ```
/// use ccl_core::GrayGrid;
///
/// let mut grid = GrayGrid::new(4, 3).unwrap();
/// grid.set(1, 2, 255).unwrap();
/// assert_eq!(grid.get(1, 2), Some(255));
/// assert_eq!(grid.get(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayGrid {
    /// Create a new grid with all cells set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u8; width as usize * height as usize];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a grid from existing row-major cell data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if a dimension is 0 or if
    /// `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the grid has zero cells. Always false for a
    /// successfully constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Linear index of the cell at `(row, col)`.
    ///
    /// Does not bounds-check; callers iterating `0..height` x `0..width`
    /// stay in range by construction.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Get the cell value at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[self.index(row, col)])
    }

    /// Set the cell value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, row: u32, col: u32, value: u8) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Set all cells to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Raw access to the cell data, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw access to the cell data, row-major.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Threshold the grid into a strict binary image.
    ///
    /// Cells `>= threshold` become 255 (foreground), all others become 0
    /// (background). Labeling itself treats any non-zero cell as
    /// foreground, so this is a normalization step, not a precondition.
    pub fn binarize(&mut self, threshold: u8) {
        for cell in &mut self.data {
            *cell = if *cell >= threshold { 255 } else { 0 };
        }
    }
}

/// 32-bit label grid
///
/// The result container for labeling. Created and written by exactly one
/// algorithm invocation, then handed to the caller; the library never
/// mutates it after return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    labels: Vec<i32>,
}

impl LabelGrid {
    /// Create a new label grid with all cells set to 0 (background).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let labels = vec![0i32; width as usize * height as usize];
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the grid has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Linear index of the cell at `(row, col)`.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Get the label at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<i32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.labels[self.index(row, col)])
    }

    /// Set the label at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, row: u32, col: u32, label: i32) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.labels[idx] = label;
        Ok(())
    }

    /// Set all cells to `label`.
    pub fn fill(&mut self, label: i32) {
        self.labels.fill(label);
    }

    /// Raw access to the labels, row-major.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.labels
    }

    /// Mutable raw access to the labels, row-major.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.labels
    }

    /// Largest label value present, or 0 for an all-background grid.
    pub fn max_label(&self) -> i32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Count the distinct positive labels present.
    ///
    /// This is the number of connected components. Label values need not
    /// be contiguous: the count is over distinct values, so grids whose
    /// labels carry gaps (as the two-pass algorithm produces) are counted
    /// correctly.
    pub fn count_labels(&self) -> usize {
        let max_label = self.max_label();
        if max_label == 0 {
            return 0;
        }

        let mut seen = vec![false; max_label as usize + 1];
        for &label in &self.labels {
            if label > 0 {
                seen[label as usize] = true;
            }
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// Map the labels onto an 8-bit grid for persistence.
    ///
    /// Background stays 0; a foreground label maps to
    /// `(label * 254 / max_label) + 1`, which lands in `[1, 255]`. With
    /// more than 254 labels distinct components collide visually; that is
    /// acceptable for visualization and irrelevant to the labeling
    /// contract.
    pub fn to_visualization(&self) -> GrayGrid {
        // Constructor cannot fail: self has validated dimensions.
        let mut out = GrayGrid::new(self.width, self.height)
            .expect("label grid dimensions already validated");

        let max_label = self.max_label();
        if max_label == 0 {
            return out;
        }

        let max = max_label as i64;
        for (cell, &label) in out.data_mut().iter_mut().zip(&self.labels) {
            if label > 0 {
                *cell = ((label as i64 * 254 / max) + 1) as u8;
            }
        }
        out
    }
}
