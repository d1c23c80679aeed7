//! ccl-bench - Benchmark harness for the labeling algorithms
//!
//! Measures the four labeling algorithms over repeated runs of the same
//! input and reports mean, standard deviation, minimum and maximum
//! wall-clock times, plus the component count each algorithm found.
//! Because labeling is deterministic, the count doubles as a consistency
//! check across algorithms.
//!
//! Synthetic inputs come from the [`synth`] module, so benchmarks run
//! without any image files on disk.
//!
//! # Examples
//!
//! ```
//! use ccl_bench::{BenchmarkConfig, run_benchmark, synth};
//!
//! let grid = synth::random_grid(
//!     &synth::SynthOptions::new(32, 32).with_density(0.4).with_seed(1),
//! )
//! .unwrap();
//!
//! let config = BenchmarkConfig::new(3);
//! let measurements = run_benchmark(&grid, &config).unwrap();
//! assert_eq!(measurements.len(), 4);
//! ```

pub mod error;
pub mod runner;
pub mod stats;
pub mod synth;
pub mod timer;

pub use error::{BenchError, BenchResult};
pub use runner::{BenchmarkConfig, Measurement, measure, run_benchmark, write_report};
pub use timer::Stopwatch;
