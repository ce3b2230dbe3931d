//! Trailing rolling minimum and maximum.
//!
//! Maintained with monotonic deques of indices, so each value is pushed and popped at most
//! once per side: O(n) for the whole series regardless of window size. The result is the
//! exact input value that is extremal in the window, so it compares bit-for-bit equal to
//! that bar's close.
//!
//! Warmup: first (window-1) values are `None`.

use crate::domain::indicator::Series;
use std::collections::VecDeque;

/// Fixed-size trailing window tracking its minimum and maximum.
///
/// Memory grows with the values pushed, never with `window`. Shared by the batch function below and the streaming engine.
#[derive(Debug, Clone)]
pub struct RollingExtrema {
    window: usize,
    seen: usize,
    // (sequence number, value); front is the current extreme.
    min_q: VecDeque<(usize, f64)>,
    max_q: VecDeque<(usize, f64)>,
}

impl RollingExtrema {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            seen: 0,
            min_q: VecDeque::new(),
            max_q: VecDeque::new(),
        }
    }

    /// Fold in the next value; returns `(min, max)` once the window is full.
    pub fn push(&mut self, x: f64) -> Option<(f64, f64)> {
        if self.window == 0 {
            return None;
        }

        let seq = self.seen;
        self.seen += 1;

        while self.min_q.back().is_some_and(|&(_, v)| v >= x) {
            self.min_q.pop_back();
        }
        self.min_q.push_back((seq, x));

        while self.max_q.back().is_some_and(|&(_, v)| v <= x) {
            self.max_q.pop_back();
        }
        self.max_q.push_back((seq, x));

        let oldest = (seq + 1).saturating_sub(self.window);
        while self.min_q.front().is_some_and(|&(s, _)| s < oldest) {
            self.min_q.pop_front();
        }
        while self.max_q.front().is_some_and(|&(s, _)| s < oldest) {
            self.max_q.pop_front();
        }

        if self.seen < self.window {
            return None;
        }
        match (self.min_q.front(), self.max_q.front()) {
            (Some(&(_, lo)), Some(&(_, hi))) => Some((lo, hi)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.seen = 0;
        self.min_q.clear();
        self.max_q.clear();
    }
}

/// Rolling `(min, max)` over the trailing `window` values.
pub fn rolling_extrema(values: &[f64], window: usize) -> (Series, Series) {
    let mut tracker = RollingExtrema::new(window);
    values
        .iter()
        .map(|&x| match tracker.push(x) {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => (None, None),
        })
        .unzip()
}
