use crate::dataset::Dataset;
use crate::error::{RegressionError, RegressionResult};

use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_DELIMITER: u8 = b',';

pub fn mk_rdr<R: Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

/// Reads a delimited file with a header row into a [`Dataset`].
///
/// Header names are trimmed; cell values are kept verbatim and only parsed
/// when a column is pulled out as observations.
pub fn read_dataset<P: AsRef<Path>>(path: P, delimiter: u8) -> RegressionResult<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| RegressionError::Io { path: path.to_path_buf(), source })?;
    read_dataset_from(file, delimiter)
}

pub fn read_dataset_from<R: Read>(reader: R, delimiter: u8) -> RegressionResult<Dataset> {
    let mut rdr = mk_rdr(reader, delimiter);

    let header: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_owned()).collect();
    if header.iter().all(|h| h.is_empty()) {
        return Err(RegressionError::EmptyFile);
    }

    let rows = rdr.records().collect::<Result<Vec<StringRecord>, _>>()?;

    Ok(Dataset::new(header, rows))
}
