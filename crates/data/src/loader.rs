//! CSV-to-record parsing.
//!
//! Each file has a header row naming the record's columns. Rows are
//! deserialized in file order; the first bad row fails the whole file.
//! A float column holding `NaN` or an infinity counts as a bad row.

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use types::Record;

use crate::error::{DataError, DataResult};

/// Default size ceiling for a single data file (100 MiB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 100 * 1024 * 1024;

/// Read `path` and deserialize every row into `R`.
///
/// A zero-byte or header-only file yields an empty vector. Files larger than
/// `max_bytes` are refused without being read.
pub fn load_records<R: Record>(path: &Path, max_bytes: u64) -> DataResult<Vec<R>> {
    let size = fs::metadata(path)
        .map_err(|e| DataError::io(path, e))?
        .len();
    if size > max_bytes {
        return Err(DataError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }

    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    let records: Vec<R> = parse_records(file).map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    // Row numbers are 1-based and count data rows only.
    if let Some((index, column)) = records
        .iter()
        .enumerate()
        .find_map(|(i, r)| r.non_finite_column().map(|c| (i, c)))
    {
        return Err(DataError::NonFinite {
            path: path.to_path_buf(),
            row: index + 1,
            column,
        });
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded data file");
    Ok(records)
}

/// Deserialize CSV rows from any reader.
pub fn parse_records<R: DeserializeOwned>(reader: impl Read) -> Result<Vec<R>, csv::Error> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}
