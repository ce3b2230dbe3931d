//! Window statistics shared by the volatility band.
//!
//! STDDEV(n)[i] = sqrt(sum((x[i-j] - SMA(n)[i])^2 for j in 0..n) / n)

/// Arithmetic mean of a non-empty window.
pub fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Population standard deviation (divides by N, not N-1) around a precomputed mean.
///
/// Computed two-pass over the window so the result is never negative and carries no
/// accumulated error from earlier windows.
pub fn population_stddev(window: &[f64], mean: f64) -> f64 {
    let variance = window
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / window.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_window() {
        assert_eq!(mean(&[10.0, 20.0, 30.0]), 20.0);
        assert_eq!(mean(&[7.5]), 7.5);
    }

    #[test]
    fn stddev_constant_values() {
        assert_eq!(population_stddev(&[100.0; 5], 100.0), 0.0);
    }

    #[test]
    fn stddev_basic_calculation() {
        let window = [10.0, 20.0, 30.0];
        let sma: f64 = 20.0;
        let expected =
            (((10.0 - sma).powi(2) + (20.0 - sma).powi(2) + (30.0 - sma).powi(2)) / 3.0).sqrt();
        assert_relative_eq!(population_stddev(&window, sma), expected, epsilon = 1e-10);
    }

    #[test]
    fn stddev_known_values() {
        let window = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_stddev(&window, mean(&window)), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn stddev_divides_by_n() {
        // Sample deviation would be sqrt(2); population is 1.
        let window = [1.0, 3.0];
        assert_relative_eq!(population_stddev(&window, 2.0), 1.0, epsilon = 1e-12);
    }
}
