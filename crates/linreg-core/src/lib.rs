//! Single-predictor least squares regression over two CSV columns.
//!
//! Load a [`Dataset`] with [`csv_parse::read_dataset`], pull a column pair out
//! as [`Observations`], fit it into a [`RegressionReport`] and optionally render
//! it with [`regression_plot::draw_regression_plot`].

pub mod csv_parse;
pub mod dataset;
pub mod error;
pub mod regression_plot;
pub mod report;
pub mod stats;

pub use dataset::{Dataset, InvalidRows, Observations};
pub use error::{RegressionError, RegressionResult};
pub use regression_plot::{draw_regression_plot, PlotConfig};
pub use report::{fit_report, RegressionReport};
pub use stats::LinReg;
