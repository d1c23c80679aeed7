//! Descriptive statistics over benchmark samples
//!
//! All functions return 0.0 for an empty sample set rather than NaN, so
//! report formatting never has to special-case a failed run.

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation.
pub fn std_deviation(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let avg = mean(samples);
    let variance = samples
        .iter()
        .map(|&s| {
            let diff = s - avg;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

/// Smallest sample, or 0.0 for an empty set.
pub fn minimum(samples: &[f64]) -> f64 {
    match samples.iter().copied().reduce(f64::min) {
        Some(v) => v,
        None => 0.0,
    }
}

/// Largest sample, or 0.0 for an empty set.
pub fn maximum(samples: &[f64]) -> f64 {
    match samples.iter().copied().reduce(f64::max) {
        Some(v) => v,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_std_deviation() {
        // Samples {2, 4, 4, 4, 5, 5, 7, 9}: classic example with sigma = 2
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_deviation(&samples) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_deviation_constant_samples() {
        assert_eq!(std_deviation(&[3.0, 3.0, 3.0]), 0.0);
        assert_eq!(std_deviation(&[]), 0.0);
    }

    #[test]
    fn test_min_max() {
        let samples = [3.5, 1.25, 9.0, 2.0];
        assert_eq!(minimum(&samples), 1.25);
        assert_eq!(maximum(&samples), 9.0);
        assert_eq!(minimum(&[]), 0.0);
        assert_eq!(maximum(&[]), 0.0);
    }
}
