use crate::error::{RegressionError, RegressionResult};

use csv::StringRecord;
use itertools::Itertools;
use std::fmt;

/// Minimum number of pairs a one-predictor least squares fit needs.
pub const MIN_PAIRS: usize = 2;

/// How rows with an empty or non-numeric cell in either selected column are
/// handled when building observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRows {
    #[default]
    Fail,
    Drop,
}

impl fmt::Display for InvalidRows {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidRows::Fail => write!(f, "fail"),
            InvalidRows::Drop => write!(f, "drop"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<StringRecord>,
}

/// Numeric (x, y) pairs pulled out of two dataset columns.
#[derive(Debug, Clone, Default)]
pub struct Observations {
    pub x_column: String,
    pub y_column: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub dropped: usize,
}

impl Dataset {
    pub fn new(header: Vec<String>, rows: Vec<StringRecord>) -> Self {
        Self { header, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    pub fn observations(
        &self,
        x_column: &str,
        y_column: &str,
        policy: InvalidRows,
    ) -> RegressionResult<Observations> {
        let (xi, yi) = match (self.column_index(x_column), self.column_index(y_column)) {
            (Some(xi), Some(yi)) => (xi, yi),
            _ => {
                return Err(RegressionError::ColumnNotFound {
                    x_column: x_column.to_owned(),
                    y_column: y_column.to_owned(),
                    available: self.header.clone(),
                })
            },
        };

        let mut obs = Observations {
            x_column: x_column.to_owned(),
            y_column: y_column.to_owned(),
            ..Default::default()
        };

        for (i, record) in self.rows.iter().enumerate() {
            let row = i + 1;
            let cells = (parse_cell(record, xi), parse_cell(record, yi));
            match (cells, policy) {
                ((Ok(x), Ok(y)), _) => {
                    obs.x.push(x);
                    obs.y.push(y);
                },
                (_, InvalidRows::Drop) => obs.dropped += 1,
                ((Err(value), _), InvalidRows::Fail) => {
                    return Err(RegressionError::NonNumeric {
                        row,
                        column: x_column.to_owned(),
                        value,
                    })
                },
                ((_, Err(value)), InvalidRows::Fail) => {
                    return Err(RegressionError::NonNumeric {
                        row,
                        column: y_column.to_owned(),
                        value,
                    })
                },
            }
        }

        if obs.len() < MIN_PAIRS {
            return Err(RegressionError::InsufficientData { len: obs.len(), needed: MIN_PAIRS });
        }

        Ok(obs)
    }
}

fn parse_cell(record: &StringRecord, idx: usize) -> Result<f64, String> {
    let raw = record.get(idx).unwrap_or("").trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(raw.to_owned()),
    }
}

impl Observations {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Observed (min, max) of the independent column.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.x.iter().copied().minmax_by(|a, b| a.total_cmp(b)).into_option()
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y.iter().copied().minmax_by(|a, b| a.total_cmp(b)).into_option()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Same pairs with the roles of the two columns exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            x_column: self.y_column.clone(),
            y_column: self.x_column.clone(),
            x: self.y.clone(),
            y: self.x.clone(),
            dropped: self.dropped,
        }
    }
}
