//! Bollinger-style volatility band.
//!
//! - Middle: Simple Moving Average over the trailing `window` values
//! - Upper: Middle + (multiplier × StdDev)
//! - Lower: Middle - (multiplier × StdDev)
//!
//! StdDev is population standard deviation (divides by N, not N-1). The band is applied
//! to typical price by the engine, but works over any input series.
//!
//! Warmup: first (window-1) values are `None`.

use crate::domain::indicator::stddev::{mean, population_stddev};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub mid: f64,
    pub upper: f64,
}

impl Band {
    /// Build a band from a window's mean and deviation. With a non-negative deviation and
    /// multiplier, `lower <= mid <= upper` holds exactly.
    pub fn around(mid: f64, stddev: f64, num_std_dev: f64) -> Self {
        let offset = num_std_dev * stddev;
        Band {
            lower: mid - offset,
            mid,
            upper: mid + offset,
        }
    }
}

pub fn calculate_bollinger(values: &[f64], window: usize, num_std_dev: f64) -> Vec<Option<Band>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let slice = &values[i + 1 - window..=i];
            let mid = mean(slice);
            Some(Band::around(mid, population_stddev(slice, mid), num_std_dev))
        })
        .collect()
}
