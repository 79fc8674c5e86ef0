//! Readers that turn a resource into raw text cells

pub mod csv_source;
pub mod workbook_source;

pub use csv_source::CsvSource;
pub use workbook_source::WorkbookSource;

use fd_core::ResourceRef;

use crate::DataError;

/// Header row plus text cells, before type inference
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }
}

/// A tabular resource that can be read in one pass
pub trait TableSource {
    /// Read the whole resource
    fn read(&self) -> Result<RawTable, DataError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}

/// Pick a reader from the resource's file extension
pub fn source_for(resource: &ResourceRef) -> Result<Box<dyn TableSource>, DataError> {
    match resource.extension().as_deref() {
        Some("csv") => Ok(Box::new(CsvSource::new(resource.clone()))),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Box::new(WorkbookSource::new(resource.clone()))),
        Some(other) => Err(DataError::UnsupportedFormat(format!(".{}", other))),
        None => Err(DataError::UnsupportedFormat(format!("no extension on {}", resource))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection_by_extension() {
        assert_eq!(source_for(&"data/a.csv".into()).unwrap().source_name(), "a.csv");
        assert_eq!(source_for(&"data/b.XLSX".into()).unwrap().source_name(), "b.XLSX");
        assert!(matches!(
            source_for(&"data/c.parquet".into()),
            Err(DataError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            source_for(&"data/README".into()),
            Err(DataError::UnsupportedFormat(_))
        ));
    }
}
