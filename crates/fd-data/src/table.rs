//! Read-only in-memory table

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::schema::SchemaDetector;
use crate::sources::RawTable;
use crate::DataError;

/// An ordered set of named columns, rows aligned by position.
///
/// Column access goes through [`Table::has_column`]-style lookups that
/// return `Option`, never through panicking indexing by name.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    batch: RecordBatch,
}

impl Table {
    pub fn new(name: impl Into<String>, batch: RecordBatch) -> Self {
        Self {
            name: name.into(),
            batch,
        }
    }

    /// Infer column types for raw text cells
    pub fn from_raw(name: impl Into<String>, raw: &RawTable) -> Result<Self, DataError> {
        let batch = SchemaDetector::default().build_batch(raw)?;
        Ok(Self::new(name, batch))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Capability check consulted before any column access
    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().index_of(name).is_ok()
    }

    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// The first `n` rows, in order
    pub fn head(&self, n: usize) -> Table {
        let len = n.min(self.num_rows());
        Table::new(self.name.clone(), self.batch.slice(0, len))
    }

    /// Names of the Int64 and Float64 columns, in table order
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .filter(|f| is_numeric(f.data_type()))
            .map(|f| f.name().clone())
            .collect()
    }

    /// Values of a numeric column, `None` for nulls
    pub fn numeric_values(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let column = self.column(name)?;

        if let Some(array) = column.as_any().downcast_ref::<Float64Array>() {
            Some(array.iter().collect())
        } else if let Some(array) = column.as_any().downcast_ref::<Int64Array>() {
            Some(array.iter().map(|v| v.map(|v| v as f64)).collect())
        } else {
            None
        }
    }

    /// Values of any column as display text, `None` for nulls
    pub fn text_values(&self, name: &str) -> Option<Vec<Option<String>>> {
        let column = self.column(name)?;
        Some((0..column.len()).map(|row| cell_text(column, row)).collect())
    }

    /// Display text of one cell, empty for nulls
    pub fn cell_text(&self, row: usize, col_idx: usize) -> String {
        if col_idx >= self.num_columns() || row >= self.num_rows() {
            return String::new();
        }
        cell_text(self.batch.column(col_idx), row).unwrap_or_default()
    }
}

/// Whether a column type takes part in correlations
pub fn is_numeric(data_type: &DataType) -> bool {
    matches!(data_type, DataType::Int64 | DataType::Float64)
}

fn cell_text(column: &ArrayRef, row: usize) -> Option<String> {
    if column.is_null(row) {
        return None;
    }
    arrow::util::display::array_value_to_string(column, row).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> Table {
        let raw = RawTable::new(
            vec!["Age".to_string(), "Profession".to_string(), "Score".to_string()],
            (0..100)
                .map(|i| vec![(20 + i % 40).to_string(), format!("Job {}", i), if i % 10 == 0 { String::new() } else { "5".to_string() }])
                .collect(),
        );
        Table::from_raw("survey.csv", &raw).unwrap()
    }

    #[test]
    fn test_column_lookup() {
        let table = survey();
        assert_eq!(table.column_names(), vec!["Age", "Profession", "Score"]);
        assert!(table.has_column("Profession"));
        assert!(!table.has_column("profession"));
        assert!(table.column("Missing").is_none());
    }

    #[test]
    fn test_head_keeps_row_order() {
        let table = survey();
        let head = table.head(5);
        assert_eq!(head.num_rows(), 5);
        assert_eq!(head.cell_text(0, 1), "Job 0");
        assert_eq!(head.cell_text(4, 1), "Job 4");
        assert_eq!(table.head(500).num_rows(), 100);
    }

    #[test]
    fn test_numeric_columns() {
        let table = survey();
        assert_eq!(table.numeric_column_names(), vec!["Age", "Score"]);

        let scores = table.numeric_values("Score").unwrap();
        assert_eq!(scores[0], None);
        assert_eq!(scores[1], Some(5.0));
        assert!(table.numeric_values("Profession").is_none());
    }

    #[test]
    fn test_text_values_skip_nulls() {
        let table = survey();
        let scores = table.text_values("Score").unwrap();
        assert_eq!(scores[0], None);
        assert_eq!(scores[1].as_deref(), Some("5"));
        assert_eq!(table.cell_text(0, 2), "");
        assert_eq!(table.cell_text(0, 99), "");
    }
}
