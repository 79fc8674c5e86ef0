use std::fs::File;
use std::io::{BufReader, Read};
use csv::ReaderBuilder;

use fd_core::ResourceRef;

use crate::DataError;
use super::{RawTable, TableSource};

/// CSV data source; the first record is the header row
pub struct CsvSource {
    resource: ResourceRef,
}

impl CsvSource {
    /// Create a new CSV source from a resource
    pub fn new(resource: ResourceRef) -> Self {
        Self { resource }
    }

    /// Read headers and records from any reader
    fn read_from<R: Read>(reader: R) -> Result<RawTable, DataError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        Ok(RawTable::new(headers, rows))
    }
}

impl TableSource for CsvSource {
    fn read(&self) -> Result<RawTable, DataError> {
        let file = File::open(self.resource.path())?;
        let raw = Self::read_from(BufReader::new(file))?;
        tracing::debug!(
            "Read {} CSV rows with {} headers from {}",
            raw.rows.len(),
            raw.headers.len(),
            self.resource
        );
        Ok(raw)
    }

    fn source_name(&self) -> &str {
        self.resource.file_name()
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_headers_and_rows() {
        let data = "Age Group,Occupation\n18-24,Student\n25-34,Engineer\n";
        let raw = CsvSource::read_from(data.as_bytes()).unwrap();

        assert_eq!(raw.headers, vec!["Age Group", "Occupation"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[1], vec!["25-34", "Engineer"]);
    }

    #[test]
    fn test_ragged_rows_are_accepted() {
        let data = "a,b,c\n1,2\n4,5,6\n";
        let raw = CsvSource::read_from(data.as_bytes()).unwrap();
        assert_eq!(raw.rows[0].len(), 2);
        assert_eq!(raw.rows[1].len(), 3);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "x,y\n1,2\n").unwrap();

        let source = CsvSource::new(ResourceRef::new(file.path()));
        let raw = source.read().unwrap();
        assert_eq!(raw.headers, vec!["x", "y"]);
        assert_eq!(raw.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvSource::new(ResourceRef::new("does/not/exist.csv"));
        assert!(matches!(source.read(), Err(DataError::Io(_))));
    }
}
