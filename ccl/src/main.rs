// CLI entry for connected component labeling
use anyhow::Result;
use ccl_bench::Stopwatch;
use ccl_io::PnmEncoding;
use ccl_label::{Algorithm, Connectivity};
use clap::{ArgAction, Parser, ValueHint};
use log::debug;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ccl",
    version,
    about = "Label connected components of a binary image"
)]
struct Cli {
    /// Input image path (.pgm or .ppm; color input is converted to gray)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output path for the labeled visualization (.pgm or .ppm)
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Labeling algorithm: two_pass | union_find | kruskal | prim
    algorithm: String,

    /// Connectivity: 4 or 8
    connectivity: u32,

    /// Binarization threshold applied before labeling
    #[arg(long = "threshold", default_value_t = 128)]
    threshold: u8,

    /// Write ASCII (P2/P3) output instead of binary
    #[arg(long = "ascii", action = ArgAction::SetTrue)]
    ascii: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let algorithm: Algorithm = cli.algorithm.parse()?;
    let connectivity = Connectivity::try_from(cli.connectivity)?;

    let mut grid = ccl_io::read_image(&cli.input)?;
    println!(
        "loaded '{}': {}x{} ({} cells)",
        cli.input.display(),
        grid.width(),
        grid.height(),
        grid.len()
    );

    grid.binarize(cli.threshold);
    debug!("binarized with threshold {}", cli.threshold);

    let watch = Stopwatch::start();
    let labels = algorithm.label(&grid, connectivity);
    let elapsed = watch.elapsed_ms();

    println!(
        "{} ({}-connectivity): {} components in {:.2} ms",
        algorithm.name(),
        connectivity.degree(),
        labels.count_labels(),
        elapsed
    );

    let encoding = if cli.ascii {
        PnmEncoding::Ascii
    } else {
        PnmEncoding::Binary
    };
    ccl_io::write_image(&labels.to_visualization(), &cli.output, encoding)?;
    println!("wrote '{}'", cli.output.display());

    Ok(())
}
