use linreg_core::csv_parse::read_dataset;
use linreg_core::regression_plot::{draw_regression_plot, PlotConfig};
use linreg_core::{InvalidRows, RegressionError, RegressionReport};

use std::io::{self, Write};
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub x_column: String,
    pub y_column: String,
    pub delimiter: u8,
    pub policy: InvalidRows,
    pub format: ReportFormat,
    /// `None` skips rendering.
    pub plot: Option<PathBuf>,
    pub verbose: bool,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("Error loading file: {0}")]
    Load(#[source] RegressionError),
    #[error("Error: {0}")]
    Regression(#[source] RegressionError),
    #[error("Error: {0}")]
    Io(#[from] io::Error),
}

impl From<RegressionError> for CmdError {
    fn from(e: RegressionError) -> Self {
        if e.is_load_error() {
            CmdError::Load(e)
        } else {
            CmdError::Regression(e)
        }
    }
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<RegressionReport, CmdError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Fits, writes the report to `out`, then renders the plot.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<RegressionReport, CmdError> {
        let dataset = read_dataset(&self.input, self.delimiter)?;
        self.log(format_args!(
            "read {} rows from '{}' (invalid rows: {})",
            dataset.len(),
            self.input.display(),
            self.policy
        ));

        let obs = dataset.observations(&self.x_column, &self.y_column, self.policy)?;
        if obs.dropped > 0 {
            self.log(format_args!("dropped {} rows with non-numeric values", obs.dropped));
        }

        let report = RegressionReport::from_observations(&obs)?;

        match self.format {
            ReportFormat::Text => writeln!(out, "{report}")?,
            ReportFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        }

        if let Some(path) = &self.plot {
            draw_regression_plot(&obs, &report, path, &PlotConfig::default())?;
            self.log(format_args!("plot written to '{}'", path.display()));
        }

        Ok(report)
    }

    fn log(&self, args: std::fmt::Arguments) {
        if self.verbose {
            eprintln!("{args}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn config(input: PathBuf, x: &str, y: &str) -> Config {
        Config {
            input,
            x_column: x.to_owned(),
            y_column: y.to_owned(),
            delimiter: b',',
            policy: InvalidRows::Fail,
            format: ReportFormat::Text,
            plot: None,
            verbose: false,
        }
    }

    #[test]
    fn test_text_report() {
        let file = csv_file("x,y\n0,0\n1,1\n");
        let mut out = Vec::new();

        config(file.path().to_path_buf(), "x", "y").run_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\nLinear Regression Results:\nSlope = 1.00\ny-intercept = 0.00\nR-squared = 1.000\nMSE = 0.00\n"
        );
    }

    #[test]
    fn test_json_report() {
        let file = csv_file("x,y\n1,3\n2,5\n3,7\n");
        let mut cfg = config(file.path().to_path_buf(), "x", "y");
        cfg.format = ReportFormat::Json;
        let mut out = Vec::new();

        let report = cfg.run_to(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["n"], 3);
        assert!((json["slope"].as_f64().unwrap() - report.slope()).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let cfg = config(PathBuf::from("no/such/file.csv"), "x", "y");
        let err = cfg.run_to(&mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CmdError::Load(RegressionError::Io { .. })));
        assert!(err.to_string().starts_with("Error loading file:"));
    }

    #[test]
    fn test_missing_column() {
        let file = csv_file("a,b\n1,2\n3,4\n");
        let cfg = config(file.path().to_path_buf(), "a", "c");
        let err = cfg.run_to(&mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CmdError::Regression(RegressionError::ColumnNotFound { .. })));
        assert!(err.to_string().contains("Available columns: a, b"));
    }

    #[test]
    fn test_drop_policy() {
        let file = csv_file("x,y\n0,0\nn/a,4\n1,1\n");
        let mut cfg = config(file.path().to_path_buf(), "x", "y");
        assert!(matches!(
            cfg.run_to(&mut Vec::<u8>::new()),
            Err(CmdError::Regression(RegressionError::NonNumeric { row: 2, .. }))
        ));

        cfg.policy = InvalidRows::Drop;
        let report = cfg.run_to(&mut Vec::<u8>::new()).unwrap();
        assert_eq!(report.n, 2);
        assert_eq!(report.dropped, 1);
    }

    #[test]
    fn test_write_failure_message() {
        let err = CmdError::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(err.to_string(), "Error: broken pipe");
    }
}
