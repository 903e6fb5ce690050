//! Data directory access and dataset metadata.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use types::{City, Dataset, PopulationRecord, Record, SalesRecord, StockPrice};

use crate::error::DataResult;
use crate::loader::{DEFAULT_MAX_FILE_BYTES, load_records};

/// Read-only view of the directory holding the CSV fixtures.
///
/// Holds no records. Each `load` re-reads the file from disk.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
    max_file_bytes: u64,
}

/// Metadata describing one dataset, as served by `/api/datasets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub name: Dataset,
    pub file: &'static str,
    pub endpoint: &'static str,
    /// Whether the file currently reads and parses cleanly.
    pub available: bool,
    pub size_bytes: Option<u64>,
    /// File modification time, Unix seconds.
    pub last_modified: Option<u64>,
    pub row_count: Option<usize>,
    pub column_count: usize,
    pub columns: Vec<&'static str>,
    /// Reason the dataset is unavailable.
    pub error: Option<String>,
}

impl DataStore {
    /// Create a store rooted at `dir` with the default size ceiling.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }

    /// Set the per-file size ceiling in bytes.
    pub fn max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    /// Data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a dataset's backing file.
    pub fn path_of(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(dataset.file_name())
    }

    /// Load every row of the dataset holding `R`.
    pub fn load<R: Record>(&self) -> DataResult<Vec<R>> {
        let path = self.path_of(R::DATASET);
        load_records(&path, self.max_file_bytes).inspect_err(|e| {
            tracing::warn!(dataset = %R::DATASET, error = %e, "dataset unavailable");
        })
    }

    /// Number of rows in a dataset, parsing it with its record kind.
    pub fn row_count(&self, dataset: Dataset) -> DataResult<usize> {
        match dataset {
            Dataset::Cities => self.load::<City>().map(|r| r.len()),
            Dataset::Sales => self.load::<SalesRecord>().map(|r| r.len()),
            Dataset::StockPrices => self.load::<StockPrice>().map(|r| r.len()),
            Dataset::Population => self.load::<PopulationRecord>().map(|r| r.len()),
        }
    }

    /// Describe a dataset. Never fails: problems are reported in the result.
    pub fn describe(&self, dataset: Dataset) -> DatasetInfo {
        let metadata = fs::metadata(self.path_of(dataset)).ok();
        let size_bytes = metadata.as_ref().map(|m| m.len());
        let last_modified = metadata
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs());
        let (row_count, error) = match self.row_count(dataset) {
            Ok(rows) => (Some(rows), None),
            Err(e) => (None, Some(e.to_string())),
        };

        DatasetInfo {
            name: dataset,
            file: dataset.file_name(),
            endpoint: dataset.endpoint(),
            available: error.is_none(),
            size_bytes,
            last_modified,
            row_count,
            column_count: dataset.columns().len(),
            columns: dataset.columns().to_vec(),
            error,
        }
    }

    /// Describe every dataset in catalogue order.
    pub fn catalog(&self) -> Vec<DatasetInfo> {
        Dataset::ALL.iter().map(|&d| self.describe(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, DataStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        let store = DataStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_resolves_file_from_record_kind() {
        let (_dir, store) = store_with(&[(
            "sales.csv",
            "month,product,sales\n2024-01,Laptops,1.5\n2024-01,Phones,2.5\n",
        )]);

        let sales: Vec<SalesRecord> = store.load().unwrap();
        assert_eq!(sales.len(), 2);
        assert_eq!(store.row_count(Dataset::Sales).unwrap(), 2);
    }

    #[test]
    fn test_describe_available_dataset() {
        let contents = "country,year,population,gdp_per_capita\nJapan,2020,125800000,40113.1\n";
        let (_dir, store) = store_with(&[("population.csv", contents)]);

        let info = store.describe(Dataset::Population);
        assert!(info.available);
        assert_eq!(info.row_count, Some(1));
        assert_eq!(info.size_bytes, Some(contents.len() as u64));
        assert!(info.last_modified.is_some_and(|secs| secs > 0));
        assert_eq!(info.column_count, 4);
        assert_eq!(info.columns, PopulationRecord::COLUMNS.to_vec());
        assert_eq!(info.endpoint, "/api/population");
        assert!(info.error.is_none());
    }

    #[test]
    fn test_describe_missing_dataset() {
        let (_dir, store) = store_with(&[]);

        let info = store.describe(Dataset::StockPrices);
        assert!(!info.available);
        assert_eq!(info.size_bytes, None);
        assert_eq!(info.last_modified, None);
        assert_eq!(info.column_count, 7);
        assert!(info.error.unwrap().contains("not found"));
    }

    #[test]
    fn test_catalog_covers_all_datasets_in_order() {
        let (_dir, store) = store_with(&[("cities.csv", "")]);

        let catalog = store.catalog();
        let names: Vec<Dataset> = catalog.iter().map(|i| i.name).collect();
        assert_eq!(names, Dataset::ALL.to_vec());
        assert!(catalog[0].available);
        assert_eq!(catalog[0].row_count, Some(0));
    }

    #[test]
    fn test_size_ceiling_applies_to_store() {
        let (_dir, store) = store_with(&[("cities.csv", "name,country,latitude,longitude,population\n")]);
        let store = store.max_file_bytes(4);
        assert!(matches!(
            store.load::<City>(),
            Err(DataError::TooLarge { .. })
        ));
    }
}
