// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Progress reporting for per-value encrypt/decrypt loops.

use tracing::info;

/// Emits a progress line at each 10% completion boundary.
///
/// Single-threaded by construction, so progress lines interleave
/// deterministically with the computation they report on.
pub struct ProgressMeter {
    scheme: &'static str,
    op: &'static str,
    total: usize,
    interval: usize,
}

impl ProgressMeter {
    pub fn new(scheme: &'static str, op: &'static str, total: usize) -> Self {
        Self {
            scheme,
            op,
            total,
            // one line per 10% of the loop; every iteration for tiny n
            interval: std::cmp::max(total / 10, 1),
        }
    }

    /// Reports the completion of item `completed` (1-based).
    pub fn tick(&self, completed: usize) {
        if completed % self.interval == 0 || completed == self.total {
            self.emit(completed);
        }
    }

    /// Reports a packed operation that completes in one step.
    pub fn complete(&self) {
        self.emit(self.total);
    }

    fn emit(&self, completed: usize) {
        let pct = (completed as f64 / self.total as f64) * 100.0;
        info!("{} {} progress: {:.2}%", self.scheme, self.op, pct);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_ten_percent() {
        let meter = ProgressMeter::new("Paillier", "encrypt", 100);
        assert_eq!(meter.interval, 10);
    }

    #[test]
    fn test_interval_never_zero() {
        // n < 10 must not divide by zero when ticking
        let meter = ProgressMeter::new("Paillier", "encrypt", 3);
        assert_eq!(meter.interval, 1);
        meter.tick(1);
        meter.tick(3);
    }
}
