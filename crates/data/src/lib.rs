//! Data layer for the Vizora dashboard.
//!
//! Reads the fixed CSV fixtures from disk and turns them into typed records.
//! Nothing is cached: every call re-reads its file, so the lifecycle of a
//! record is read, serialize, transmit, discard.
//!
//! # Modules
//!
//! - [`loader`]: Generic CSV-to-record parsing with a file size ceiling
//! - [`store`]: `DataStore` bound to a data directory, plus dataset metadata
//! - [`error`]: `DataError`, the server's `DataUnavailable` condition

pub mod error;
pub mod loader;
pub mod store;

pub use error::{DataError, DataResult};
pub use loader::{DEFAULT_MAX_FILE_BYTES, load_records, parse_records};
pub use store::{DataStore, DatasetInfo};
