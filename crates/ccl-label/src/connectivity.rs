//! Neighbor rules for 4-way and 8-way connectivity
//!
//! Two pixels are adjacent under 4-way connectivity when they differ by one
//! step orthogonally, and under 8-way connectivity when they differ by one
//! step orthogonally or diagonally. Both neighbor functions return
//! coordinates in a fixed order so that downstream "smallest label wins"
//! tie-breaks are deterministic.

use crate::error::LabelError;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    Four,
    /// 8-way connectivity (includes diagonals)
    Eight,
}

impl Connectivity {
    /// Number of neighbor offsets: 4 or 8.
    pub fn degree(self) -> u32 {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}

impl TryFrom<u32> for Connectivity {
    type Error = LabelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(LabelError::InvalidConnectivity(other)),
        }
    }
}

/// In-bounds neighbors of `(row, col)` in a `width` x `height` grid.
///
/// Order is fixed: N, S, W, E for 4-way; N, S, W, E, NW, NE, SW, SE for
/// 8-way. Out-of-bounds candidates are silently omitted.
pub fn neighbors(
    row: u32,
    col: u32,
    width: u32,
    height: u32,
    connectivity: Connectivity,
) -> Vec<(u32, u32)> {
    const OFFSETS: [(i64, i64); 8] = [
        (-1, 0), // N
        (1, 0),  // S
        (0, -1), // W
        (0, 1),  // E
        (-1, -1),
        (-1, 1),
        (1, -1),
        (1, 1),
    ];

    let count = connectivity.degree() as usize;
    let mut out = Vec::with_capacity(count);
    for &(dr, dc) in &OFFSETS[..count] {
        let nr = row as i64 + dr;
        let nc = col as i64 + dc;
        if nr >= 0 && nr < height as i64 && nc >= 0 && nc < width as i64 {
            out.push((nr as u32, nc as u32));
        }
    }
    out
}

/// Neighbors of `(row, col)` already visited by a row-major scan.
///
/// For a scan by increasing row, then increasing column, these are
/// {N, W} under 4-way connectivity and {NW, N, NE, W} under 8-way, in that
/// order. Raster algorithms restrict themselves to this set so every
/// adjacent pair is considered exactly once.
pub fn preceding_neighbors(
    row: u32,
    col: u32,
    width: u32,
    _height: u32,
    connectivity: Connectivity,
) -> Vec<(u32, u32)> {
    let mut out = Vec::with_capacity(4);
    match connectivity {
        Connectivity::Four => {
            if row > 0 {
                out.push((row - 1, col)); // N
            }
            if col > 0 {
                out.push((row, col - 1)); // W
            }
        }
        Connectivity::Eight => {
            if row > 0 && col > 0 {
                out.push((row - 1, col - 1)); // NW
            }
            if row > 0 {
                out.push((row - 1, col)); // N
            }
            if row > 0 && col + 1 < width {
                out.push((row - 1, col + 1)); // NE
            }
            if col > 0 {
                out.push((row, col - 1)); // W
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(Connectivity::try_from(4).unwrap(), Connectivity::Four);
        assert_eq!(Connectivity::try_from(8).unwrap(), Connectivity::Eight);
        assert!(Connectivity::try_from(0).is_err());
        assert!(Connectivity::try_from(6).is_err());
    }

    #[test]
    fn test_interior_neighbors() {
        let n4 = neighbors(1, 1, 3, 3, Connectivity::Four);
        assert_eq!(n4, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);

        let n8 = neighbors(1, 1, 3, 3, Connectivity::Eight);
        assert_eq!(n8.len(), 8);
        assert_eq!(&n8[..4], &[(0, 1), (2, 1), (1, 0), (1, 2)]);
        assert_eq!(&n8[4..], &[(0, 0), (0, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_corner_neighbors_clipped() {
        // Top-left corner: only S and E survive under 4-way
        let n4 = neighbors(0, 0, 3, 3, Connectivity::Four);
        assert_eq!(n4, vec![(1, 0), (0, 1)]);

        // Bottom-right corner under 8-way: N, W, NW
        let n8 = neighbors(2, 2, 3, 3, Connectivity::Eight);
        assert_eq!(n8, vec![(1, 2), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_preceding_neighbors_four() {
        assert!(preceding_neighbors(0, 0, 3, 3, Connectivity::Four).is_empty());
        assert_eq!(
            preceding_neighbors(0, 1, 3, 3, Connectivity::Four),
            vec![(0, 0)]
        );
        assert_eq!(
            preceding_neighbors(1, 1, 3, 3, Connectivity::Four),
            vec![(0, 1), (1, 0)]
        );
    }

    #[test]
    fn test_preceding_neighbors_eight() {
        // Interior pixel: NW, N, NE, W in that order
        assert_eq!(
            preceding_neighbors(1, 1, 3, 3, Connectivity::Eight),
            vec![(0, 0), (0, 1), (0, 2), (1, 0)]
        );

        // Right edge: NE clipped
        assert_eq!(
            preceding_neighbors(1, 2, 3, 3, Connectivity::Eight),
            vec![(0, 1), (0, 2), (1, 1)]
        );

        // First row: only W
        assert_eq!(
            preceding_neighbors(0, 2, 3, 3, Connectivity::Eight),
            vec![(0, 1)]
        );
    }

    #[test]
    fn test_single_cell_grid() {
        assert!(neighbors(0, 0, 1, 1, Connectivity::Eight).is_empty());
        assert!(preceding_neighbors(0, 0, 1, 1, Connectivity::Eight).is_empty());
    }
}
