use serde::Serialize;

use crate::data::extract::CoordinatePair;

/// Raw power sums over a sample, shared by the correlation and the variances
/// so both are derived from exactly the same numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Sums {
    n: f64,
    x: f64,
    y: f64,
    xy: f64,
    xx: f64,
    yy: f64,
}

impl Sums {
    fn accumulate(sample: &[CoordinatePair]) -> Self {
        sample.iter().fold(Sums::default(), |acc, p| Sums {
            n: acc.n + 1.0,
            x: acc.x + p.x,
            y: acc.y + p.y,
            xy: acc.xy + p.x * p.y,
            xx: acc.xx + p.x * p.x,
            yy: acc.yy + p.y * p.y,
        })
    }

    /// Pearson's r from the raw sums. A zero (or NaN) denominator means one
    /// axis has no spread; r is reported as 0 instead of NaN or infinity.
    fn pearson(&self) -> f64 {
        let numerator = self.n * self.xy - self.x * self.y;
        let denominator =
            ((self.n * self.xx - self.x * self.x) * (self.n * self.yy - self.y * self.y)).sqrt();
        if denominator == 0.0 || denominator.is_nan() {
            return 0.0;
        }
        let r = numerator / denominator;
        if r.is_finite() {
            r
        } else {
            0.0
        }
    }

    /// Population standard deviation, with the variance clamped at 0 so
    /// rounding can never produce a negative value under the root.
    fn std_dev(&self, sum: f64, sum_sq: f64) -> f64 {
        let mean = sum / self.n;
        (sum_sq / self.n - mean * mean).max(0.0).sqrt()
    }
}

/// Correlation and per-axis descriptive statistics of a coordinate sample.
/// `x` is the critic score axis, `y` the global sales axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    pub n: usize,
    pub r: f64,
    pub mean_x: f64,
    pub sd_x: f64,
    pub mean_y: f64,
    pub sd_y: f64,
}

impl SampleStats {
    /// Stats for a sample too small to have a variance: everything but `n` is 0.
    pub fn degenerate(n: usize) -> Self {
        Self {
            n,
            r: 0.0,
            mean_x: 0.0,
            sd_x: 0.0,
            mean_y: 0.0,
            sd_y: 0.0,
        }
    }

    /// Compute stats over the sample. Total over finite input: fewer than two
    /// points give [`SampleStats::degenerate`], a constant axis gives `r == 0`.
    pub fn compute(sample: &[CoordinatePair]) -> Self {
        let n = sample.len();
        if n < 2 {
            return Self::degenerate(n);
        }

        let sums = Sums::accumulate(sample);

        Self {
            n,
            r: sums.pearson(),
            mean_x: sums.x / sums.n,
            sd_x: sums.std_dev(sums.x, sums.xx),
            mean_y: sums.y / sums.n,
            sd_y: sums.std_dev(sums.y, sums.yy),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.n < 2
    }
}
