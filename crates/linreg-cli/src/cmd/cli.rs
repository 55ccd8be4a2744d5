use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{Config, ReportFormat};
use linreg_core::regression_plot::DEFAULT_PLOT_PATH;
use linreg_core::InvalidRows;

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "linreg",
    about = "Fit a least squares line between two CSV columns, plot it and print the fit statistics",
    version
)]
pub struct Cli {
    /// CSV file with a header row
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Independent (x) column name
    #[arg(value_name = "X_COLUMN")]
    pub x_column: String,

    /// Dependent (y) column name
    #[arg(value_name = "Y_COLUMN")]
    pub y_column: String,

    /// Where to write the plot; a .svg extension writes SVG
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_PLOT_PATH)]
    pub output: PathBuf,

    /// Skip rendering the plot
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Skip rows with empty or non-numeric cells instead of failing
    #[arg(long = "drop-invalid")]
    pub drop_invalid: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Field delimiter (single character, or "tab")
    #[arg(short = 'd', long, value_parser = parse_delimiter, default_value = ",")]
    pub delimiter: u8,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            input: self.file,
            x_column: self.x_column,
            y_column: self.y_column,
            delimiter: self.delimiter,
            policy: if self.drop_invalid { InvalidRows::Drop } else { InvalidRows::Fail },
            format: if self.json { ReportFormat::Json } else { ReportFormat::Text },
            plot: if self.no_plot { None } else { Some(self.output) },
            verbose: self.verbose,
        }
    }
}
