//! Benchmark runner and report
//!
//! Measures each labeling algorithm over repeated runs of the same input
//! and summarizes the wall-clock distribution. The algorithms are
//! deterministic (same input, same output), so repeated calls are directly
//! comparable. When verification is enabled the runner also cross-checks
//! that every algorithm reports the same component count.

use crate::error::{BenchError, BenchResult};
use crate::stats;
use crate::timer::Stopwatch;
use ccl_core::GrayGrid;
use ccl_label::{Algorithm, Connectivity};
use log::info;
use std::io::Write;

/// Options for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of timed runs per algorithm
    pub runs: usize,
    /// Connectivity to label with
    pub connectivity: Connectivity,
    /// Cross-check component counts across algorithms
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            connectivity: Connectivity::Four,
            verify: true,
        }
    }
}

impl BenchmarkConfig {
    /// Create a config with the given number of runs.
    pub fn new(runs: usize) -> Self {
        Self {
            runs: runs.max(1),
            ..Default::default()
        }
    }

    /// Set the connectivity.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Enable or disable cross-algorithm verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Timing summary for one algorithm
#[derive(Debug, Clone)]
pub struct Measurement {
    /// The algorithm measured
    pub algorithm: Algorithm,
    /// Mean run time (ms)
    pub mean_ms: f64,
    /// Population standard deviation of run times (ms)
    pub std_dev_ms: f64,
    /// Fastest run (ms)
    pub min_ms: f64,
    /// Slowest run (ms)
    pub max_ms: f64,
    /// Component count reported by the final run
    pub components: usize,
}

/// Measure one algorithm over `config.runs` timed invocations.
pub fn measure(
    algorithm: Algorithm,
    input: &GrayGrid,
    config: &BenchmarkConfig,
) -> Measurement {
    let mut times = Vec::with_capacity(config.runs);
    let mut components = 0;

    for _ in 0..config.runs {
        let watch = Stopwatch::start();
        let labels = algorithm.label(input, config.connectivity);
        times.push(watch.elapsed_ms());
        components = labels.count_labels();
    }

    info!(
        "{}: {} runs, mean {:.3} ms, {} components",
        algorithm.name(),
        config.runs,
        stats::mean(&times),
        components
    );

    Measurement {
        algorithm,
        mean_ms: stats::mean(&times),
        std_dev_ms: stats::std_deviation(&times),
        min_ms: stats::minimum(&times),
        max_ms: stats::maximum(&times),
        components,
    }
}

/// Benchmark every algorithm on the same input.
///
/// # Errors
///
/// With verification enabled, returns [`BenchError::Inconsistent`] if any
/// algorithm reports a component count different from the first one's.
pub fn run_benchmark(
    input: &GrayGrid,
    config: &BenchmarkConfig,
) -> BenchResult<Vec<Measurement>> {
    let measurements: Vec<Measurement> = Algorithm::ALL
        .iter()
        .map(|&algorithm| measure(algorithm, input, config))
        .collect();

    if config.verify {
        let expected = measurements[0].components;
        for m in &measurements[1..] {
            if m.components != expected {
                return Err(BenchError::Inconsistent {
                    algorithm: m.algorithm.name(),
                    expected,
                    actual: m.components,
                });
            }
        }
    }

    Ok(measurements)
}

/// Write a comparison table for a set of measurements.
pub fn write_report(
    writer: &mut impl Write,
    measurements: &[Measurement],
    input: &GrayGrid,
    config: &BenchmarkConfig,
) -> std::io::Result<()> {
    writeln!(writer, "========================================")?;
    writeln!(
        writer,
        "Input: {}x{} ({} cells), connectivity {}",
        input.width(),
        input.height(),
        input.len(),
        config.connectivity.degree()
    )?;
    writeln!(writer, "Runs per algorithm: {}", config.runs)?;
    writeln!(writer, "========================================")?;
    writeln!(
        writer,
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "algorithm", "mean ms", "std dev", "min ms", "max ms", "components"
    )?;
    writeln!(writer, "{}", "-".repeat(68))?;

    for m in measurements {
        writeln!(
            writer,
            "{:<12} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>12}",
            m.algorithm.name(),
            m.mean_ms,
            m.std_dev_ms,
            m.min_ms,
            m.max_ms,
            m.components
        )?;
    }

    Ok(())
}
