use crate::stats::stats::scaled_deviations;

use serde::Serialize;
use std::fmt;

/// Straight line `y = intercept + slope * x` fitted by ordinary least squares.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

/// Prints the fitted equation, e.g. `y = 2.50x + -1.00`.
impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {:.2}x + {:.2}", self.slope, self.intercept)
    }
}

impl LinReg {
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Fits the line through `(x, y)`.
    ///
    /// Returns `None` when the slices differ in length, hold fewer than two
    /// points, or `x` has no variance.
    pub fn train(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.len() != y.len() || x.len() < 2 {
            return None;
        }

        // constant x: the mean may not round back to the value, so compare directly
        if x.iter().all(|&xi| xi == x[0]) {
            return None;
        }

        // sums run over scaled deviations so huge but varying x stays finite
        let dx = scaled_deviations(x);
        let dy = scaled_deviations(y);

        let ss_uu: f64 = dx.scaled.iter().map(|u| u * u).sum();
        if !ss_uu.is_finite() || ss_uu <= 0.0 {
            return None;
        }

        let ss_uv: f64 = dx.scaled.iter().zip(&dy.scaled).map(|(u, v)| u * v).sum();

        let slope = ss_uv / ss_uu * (dy.scale / dx.scale);
        let intercept = dy.mean - slope * dx.mean;

        Some(Self { intercept, slope })
    }

    pub fn predict_all(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.calculate(xi)).collect()
    }
}
