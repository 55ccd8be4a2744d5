use crate::dataset::{Dataset, InvalidRows, Observations, MIN_PAIRS};
use crate::error::{RegressionError, RegressionResult};
use crate::stats::{
    adjusted_r2, mse, r2_from_predictions, rmse, slope_test, sum_squared_residuals, LinReg,
};

use serde::Serialize;
use std::fmt;

/// Result of fitting one column against another.
#[derive(Debug, Clone, Serialize)]
pub struct RegressionReport {
    pub x_column: String,
    pub y_column: String,
    #[serde(flatten)]
    pub model: LinReg,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    pub mse: f64,
    pub rmse: f64,
    pub n: usize,
    pub dropped: usize,
    pub x_range: (f64, f64),
    pub std_err_slope: Option<f64>,
    pub p_value: Option<f64>,
}

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Linear Regression Results:")?;
        writeln!(f, "Slope = {:.2}", self.slope())?;
        writeln!(f, "y-intercept = {:.2}", self.intercept())?;
        writeln!(f, "R-squared = {:.3}", self.r_squared)?;
        write!(f, "MSE = {:.2}", self.mse)
    }
}

/// Loads the two columns from `dataset` and fits them.
pub fn fit_report(
    dataset: &Dataset,
    x_column: &str,
    y_column: &str,
    policy: InvalidRows,
) -> RegressionResult<RegressionReport> {
    let obs = dataset.observations(x_column, y_column, policy)?;
    RegressionReport::from_observations(&obs)
}

impl RegressionReport {
    pub fn from_observations(obs: &Observations) -> RegressionResult<Self> {
        let x = &obs.x;
        let y = &obs.y;
        let n = obs.len();

        let insufficient = || RegressionError::InsufficientData { len: n, needed: MIN_PAIRS };

        let model = LinReg::train(x, y).ok_or_else(|| {
            if n < MIN_PAIRS {
                insufficient()
            } else {
                RegressionError::DegenerateX { column: obs.x_column.clone() }
            }
        })?;

        let y_hat = model.predict_all(x);
        let rss = sum_squared_residuals(y, &y_hat);

        let r_squared = r2_from_predictions(y, &y_hat).ok_or_else(insufficient)?;
        let mse_val = mse(y, &y_hat).ok_or_else(insufficient)?;
        let rmse_val = rmse(y, &y_hat).ok_or_else(insufficient)?;
        let x_range = obs.x_range().ok_or_else(insufficient)?;

        let inference = slope_test(x, rss, model.slope);

        Ok(Self {
            x_column: obs.x_column.clone(),
            y_column: obs.y_column.clone(),
            model,
            r_squared,
            adjusted_r_squared: adjusted_r2(r_squared, n, 1),
            mse: mse_val,
            rmse: rmse_val,
            n,
            dropped: obs.dropped,
            x_range,
            std_err_slope: inference.map(|t| t.std_err),
            p_value: inference.map(|t| t.p_value),
        })
    }

    pub fn slope(&self) -> f64 {
        self.model.slope
    }

    pub fn intercept(&self) -> f64 {
        self.model.intercept
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x)
    }

    pub fn equation(&self) -> String {
        self.model.to_string()
    }

    pub fn r_squared_label(&self) -> String {
        format!("R\u{b2} = {:.3}", self.r_squared)
    }

    /// End points of the fitted line over the observed x range.
    pub fn line_points(&self) -> [(f64, f64); 2] {
        let (x_min, x_max) = self.x_range;
        [(x_min, self.predict(x_min)), (x_max, self.predict(x_max))]
    }

    pub fn to_json(&self) -> RegressionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
