// Benchmark driver: compares the four labeling algorithms on one input
use anyhow::Result;
use ccl_bench::synth::{SynthOptions, random_grid};
use ccl_bench::{BenchmarkConfig, run_benchmark, write_report};
use ccl_label::Connectivity;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "benchmark",
    version,
    about = "Benchmark the labeling algorithms against each other"
)]
struct Cli {
    /// Input image (.pgm or .ppm); omit to use a synthetic random grid
    #[arg(long = "input", value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Timed runs per algorithm
    #[arg(long = "runs", default_value_t = 10)]
    runs: usize,

    /// Connectivity: 4 or 8
    #[arg(long = "connectivity", default_value_t = 4)]
    connectivity: u32,

    /// Binarization threshold for image input
    #[arg(long = "threshold", default_value_t = 128)]
    threshold: u8,

    /// Synthetic grid width
    #[arg(long = "width", default_value_t = 512)]
    width: u32,

    /// Synthetic grid height
    #[arg(long = "height", default_value_t = 512)]
    height: u32,

    /// Synthetic foreground density
    #[arg(long = "density", default_value_t = 0.5)]
    density: f64,

    /// Synthetic RNG seed
    #[arg(long = "seed", default_value_t = 0)]
    seed: u64,

    /// Skip the cross-algorithm component-count check
    #[arg(long = "no-verify", action = ArgAction::SetTrue)]
    no_verify: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let connectivity = Connectivity::try_from(cli.connectivity)?;

    let grid = match &cli.input {
        Some(path) => {
            let mut grid = ccl_io::read_image(path)?;
            grid.binarize(cli.threshold);
            grid
        }
        None => random_grid(
            &SynthOptions::new(cli.width, cli.height)
                .with_density(cli.density)
                .with_seed(cli.seed),
        )?,
    };

    let config = BenchmarkConfig::new(cli.runs)
        .with_connectivity(connectivity)
        .with_verify(!cli.no_verify);

    let measurements = run_benchmark(&grid, &config)?;
    write_report(&mut std::io::stdout(), &measurements, &grid, &config)?;

    Ok(())
}
