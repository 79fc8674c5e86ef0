//! Data loading for the dashboard
//!
//! Spreadsheet and CSV resources are read once into Arrow-backed [`Table`]s.
//! [`load`] is the boundary where failures turn into diagnostics.

pub mod config;
pub mod loader;
pub mod schema;
pub mod sources;
pub mod table;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use loader::load;
pub use schema::SchemaDetector;
pub use sources::{source_for, CsvSource, RawTable, TableSource, WorkbookSource};
pub use table::Table;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Schema detection error: {0}")]
    SchemaDetection(String),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<calamine::Error> for DataError {
    fn from(error: calamine::Error) -> Self {
        match error {
            calamine::Error::Io(io_err) => DataError::Io(io_err),
            other => DataError::Workbook(other.to_string()),
        }
    }
}
