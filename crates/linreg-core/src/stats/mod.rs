pub mod linreg;
pub mod stats;

pub use linreg::LinReg;
pub use stats::{
    adjusted_r2, mse, r2_from_predictions, rmse, scaled_deviations, slope_test,
    sum_squared_residuals, Deviations, SlopeTest,
};
