use statrs::distribution::{ContinuousCDF, StudentsT};

pub fn sum_squared_residuals(y: &[f64], y_hat: &[f64]) -> f64 {
    y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum()
}

pub fn mse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    Some(sum_squared_residuals(y, y_hat) / y.len() as f64)
}

pub fn rmse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    mse(y, y_hat).map(f64::sqrt)
}

/// Coefficient of determination.
///
/// A constant `y` has no variance to explain, so the score is 1.0 when the
/// predictions are exact and 0.0 otherwise.
pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.len() < 2 {
        return None;
    }

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;

    let ss_res = sum_squared_residuals(y, y_hat);
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Some(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }

    Some(1.0 - ss_res / ss_tot)
}

pub fn adjusted_r2(r2: f64, n: usize, k: usize) -> f64 {
    if n <= k + 1 {
        return r2; // Not enough data to adjust
    }
    1.0 - (1.0 - r2) * (n as f64 - 1.0) / (n as f64 - k as f64 - 1.0)
}

/// Deviations from the mean divided by their largest magnitude.
///
/// Keeps sums of squares finite for values near the top of the `f64` range;
/// the true deviation is `scaled[i] * scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct Deviations {
    pub mean: f64,
    pub scale: f64,
    pub scaled: Vec<f64>,
}

pub fn scaled_deviations(v: &[f64]) -> Deviations {
    let n = v.len() as f64;
    let sum = v.iter().sum::<f64>();
    let mean = if sum.is_finite() { sum / n } else { v.iter().map(|vi| vi / n).sum() };

    let raw: Vec<f64> = v.iter().map(|vi| vi - mean).collect();
    let max_dev = raw.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    // all values equal: every deviation is zero, any scale works
    let scale = if max_dev > 0.0 { max_dev } else { 1.0 };

    Deviations { mean, scale, scaled: raw.iter().map(|d| d / scale).collect() }
}

/// Standard error and two-sided p-value of a fitted slope against zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeTest {
    pub std_err: f64,
    pub p_value: f64,
}

/// t-test of the slope of a one-predictor fit.
///
/// `None` when there are no residual degrees of freedom or the standard
/// error is zero (every point on the line).
pub fn slope_test(x: &[f64], rss: f64, slope: f64) -> Option<SlopeTest> {
    let n = x.len() as f64;
    if x.len() <= 2 {
        return None;
    }

    let dx = scaled_deviations(x);
    let ss_uu: f64 = dx.scaled.iter().map(|u| u * u).sum();
    if !ss_uu.is_finite() || ss_uu <= 0.0 {
        return None;
    }

    let sigma = (rss / (n - 2.0)).sqrt();
    let std_err = sigma / ss_uu.sqrt() / dx.scale;
    if !std_err.is_finite() || std_err <= 0.0 {
        return None;
    }

    let t_stat = slope / std_err;
    if !t_stat.is_finite() {
        return None;
    }
    let dist = StudentsT::new(0.0, 1.0, n - 2.0).ok()?;
    let p_value = 2.0 * (1.0 - dist.cdf(t_stat.abs()));

    Some(SlopeTest { std_err, p_value })
}
