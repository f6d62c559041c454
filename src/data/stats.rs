use serde::Serialize;

use super::model::Point;

// ---------------------------------------------------------------------------
// Regression – ordinary least squares fit y = slope * x + intercept
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Line evaluated at `x_min`.
    pub left: Point,
    /// Line evaluated at `x_max`.
    pub right: Point,
}

impl Regression {
    fn fit(slope: f64, intercept: f64, x_min: f64, x_max: f64) -> Self {
        let mut reg = Regression {
            slope,
            intercept,
            left: Point::new(x_min, 0.0),
            right: Point::new(x_max, 0.0),
        };
        reg.left.y = reg.predict(x_min);
        reg.right.y = reg.predict(x_max);
        reg
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// ---------------------------------------------------------------------------
// Statistics – summary over a point sequence
// ---------------------------------------------------------------------------

/// Descriptive statistics of a point sequence.
///
/// `correlation` and `regression` are `None` when undefined: a constant
/// column on either axis, or spreads too large to represent. Standard
/// deviations use the sample (`n - 1`) denominator and are `0.0` for a
/// single point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
    pub correlation: Option<f64>,
    pub regression: Option<Regression>,
}

impl Statistics {
    /// Summarise `points`; `None` for an empty slice.
    pub fn compute(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let count = points.len();
        let n = count as f64;

        let x_min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let x_max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

        let ss_x = sum_of_squares(points.iter().map(|p| p.x), mean_x);
        let ss_y = sum_of_squares(points.iter().map(|p| p.y), mean_y);
        let sp_xy: f64 = points
            .iter()
            .map(|p| (p.x - mean_x) * (p.y - mean_y))
            .sum();

        // n = 1: no spread, everything below collapses to zero / undefined.
        let dof = if count > 1 { n - 1.0 } else { 1.0 };
        let var_x = ss_x / dof;
        let var_y = ss_y / dof;
        let cov = if count > 1 { sp_xy / dof } else { 0.0 };
        let std_dev_x = var_x.sqrt();
        let std_dev_y = var_y.sqrt();

        // Overflowing spreads (inf / inf) count as undefined too.
        let correlation = if std_dev_x > 0.0 && std_dev_y > 0.0 {
            Some(cov / (std_dev_x * std_dev_y))
                .filter(|r| r.is_finite())
                .map(|r| r.clamp(-1.0, 1.0))
        } else {
            None
        };

        // Undefined whenever the correlation is.
        let regression = correlation.and_then(|_| {
            let slope = cov / var_x;
            let intercept = mean_y - slope * mean_x;
            (slope.is_finite() && intercept.is_finite())
                .then(|| Regression::fit(slope, intercept, x_min, x_max))
        });

        Some(Statistics {
            count,
            x_min,
            x_max,
            mean_x,
            mean_y,
            std_dev_x,
            std_dev_y,
            correlation,
            regression,
        })
    }

    /// Half-height of the error bars: `multiplier` standard deviations of y.
    ///
    /// This is a plain ±cσ band, not a confidence-interval quantile.
    pub fn error_bar_half_width(&self, multiplier: f64) -> f64 {
        multiplier * self.std_dev_y
    }

    /// Horizontal line at `mean_y` spanning the data's x extent.
    pub fn mean_line(&self) -> [Point; 2] {
        [
            Point::new(self.x_min, self.mean_y),
            Point::new(self.x_max, self.mean_y),
        ]
    }
}

/// Σ(v - mean)², exactly zero when every value is identical.
fn sum_of_squares(values: impl Iterator<Item = f64> + Clone, mean: f64) -> f64 {
    let mut iter = values.clone();
    if let Some(first) = iter.next() {
        if iter.all(|v| v == first) {
            return 0.0;
        }
    }
    values.map(|v| (v - mean).powi(2)).sum()
}
