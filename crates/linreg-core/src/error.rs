use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RegressionError {
    #[error("could not open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("file has no header row")]
    EmptyFile,
    #[error(
        "column '{x_column}' or '{y_column}' not found in the file\nAvailable columns: {}",
        .available.join(", ")
    )]
    ColumnNotFound { x_column: String, y_column: String, available: Vec<String> },
    #[error("row {row}: value '{value}' in column '{column}' is not numeric")]
    NonNumeric { row: usize, column: String, value: String },
    #[error("not enough numeric data: got {len} pairs, need at least {needed}")]
    InsufficientData { len: usize, needed: usize },
    #[error("degenerate x: no variance in column '{column}'")]
    DegenerateX { column: String },
    #[error("plotting error: {0}")]
    Plot(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegressionError {
    /// True for failures that happen while reading the input file, before
    /// any column lookup.
    pub fn is_load_error(&self) -> bool {
        matches!(self, RegressionError::Io { .. } | RegressionError::Csv(_) | RegressionError::EmptyFile)
    }
}

pub type RegressionResult<T> = Result<T, RegressionError>;
