//! ccl-io - PGM/PPM image I/O
//!
//! This crate supplies grids to and persists grids from the labeling
//! engine. Two formats are supported, each in ASCII and binary variants:
//!
//! - PGM (P2/P5) - grayscale, read and written directly
//! - PPM (P3/P6) - color, converted to grayscale on read and replicated
//!   over R=G=B on write
//!
//! The path-level [`read_image`] / [`write_image`] entry points choose the
//! codec from the file extension; the [`pnm`] module exposes the
//! reader/writer-based codecs directly.

pub mod error;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{PnmEncoding, read_pgm, read_ppm, write_pgm, write_ppm};

use ccl_core::GrayGrid;
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a grayscale grid from a PGM or PPM file.
///
/// The codec is chosen by the file extension (case-insensitive): `.pgm`
/// reads grayscale, `.ppm` reads color and converts to grayscale.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for any other extension, and the
/// codec's error for malformed content.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GrayGrid> {
    let path = path.as_ref();
    let format = known_format(path)?;
    let mut reader = BufReader::new(File::open(path)?);

    let grid = match format {
        Format::Pgm => pnm::read_pgm(&mut reader)?,
        Format::Ppm => pnm::read_ppm(&mut reader)?,
    };

    debug!(
        "read {}x{} grid from '{}'",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Write a grayscale grid to a PGM or PPM file.
///
/// The codec is chosen by the file extension, as in [`read_image`].
pub fn write_image<P: AsRef<Path>>(
    grid: &GrayGrid,
    path: P,
    encoding: PnmEncoding,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = known_format(path)?;
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        Format::Pgm => pnm::write_pgm(grid, &mut writer, encoding)?,
        Format::Ppm => pnm::write_ppm(grid, &mut writer, encoding)?,
    }

    debug!(
        "wrote {}x{} grid to '{}' ({:?})",
        grid.width(),
        grid.height(),
        path.display(),
        encoding
    );
    Ok(())
}

enum Format {
    Pgm,
    Ppm,
}

/// Map a file extension (case-insensitive) onto a supported format.
fn known_format(path: &Path) -> IoResult<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pgm") => Ok(Format::Pgm),
        Some("ppm") => Ok(Format::Ppm),
        _ => Err(IoError::UnsupportedFormat(format!(
            "cannot infer format of '{}' (expected .pgm or .ppm)",
            path.display()
        ))),
    }
}
