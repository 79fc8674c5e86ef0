use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use arrow::array::{ArrayRef, BooleanBuilder, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};

use crate::config::NullConfig;
use crate::sources::RawTable;
use crate::DataError;

/// Schema detector for analyzing text cells and determining column types
pub struct SchemaDetector {
    null_config: NullConfig,
}

impl SchemaDetector {
    /// Create a new schema detector
    pub fn new() -> Self {
        Self {
            null_config: NullConfig::default(),
        }
    }

    /// Detect the schema of a raw table.
    ///
    /// One field per header; cells beyond the header width are ignored.
    pub fn detect(&self, raw: &RawTable) -> Schema {
        let names = unique_headers(&raw.headers);
        let fields = names
            .into_iter()
            .enumerate()
            .map(|(col_idx, name)| {
                let data_type = self.detect_column_type(&raw.rows, col_idx);
                Field::new(name, data_type, true)
            })
            .collect::<Vec<_>>();

        Schema::new(fields)
    }

    /// Type the raw cells into an Arrow record batch
    pub fn build_batch(&self, raw: &RawTable) -> Result<RecordBatch, DataError> {
        let schema = Arc::new(self.detect(raw));

        let columns = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(col_idx, field)| self.build_column(&raw.rows, col_idx, field.data_type()))
            .collect::<Result<Vec<_>, _>>()?;

        let options = RecordBatchOptions::new().with_row_count(Some(raw.rows.len()));
        Ok(RecordBatch::try_new_with_options(schema, columns, &options)?)
    }

    fn cell<'a>(&self, row: &'a [String], col_idx: usize) -> Option<&'a str> {
        row.get(col_idx)
            .map(|s| s.as_str())
            .filter(|value| !self.null_config.is_null(value))
    }

    /// Detect column type from the non-null cells
    fn detect_column_type(&self, rows: &[Vec<String>], col_idx: usize) -> DataType {
        let mut is_bool = true;
        let mut is_int = true;
        let mut is_float = true;
        let mut seen_value = false;

        for row in rows {
            let Some(value) = self.cell(row, col_idx) else {
                continue;
            };
            let value = value.trim();
            seen_value = true;

            if is_bool && !(value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")) {
                is_bool = false;
            }
            if is_int && value.parse::<i64>().is_err() {
                is_int = false;
            }
            if is_float && value.parse::<f64>().is_err() {
                is_float = false;
            }

            if !is_bool && !is_int && !is_float {
                break;
            }
        }

        if !seen_value {
            DataType::Utf8
        } else if is_bool {
            DataType::Boolean
        } else if is_int {
            DataType::Int64
        } else if is_float {
            DataType::Float64
        } else {
            DataType::Utf8
        }
    }

    fn build_column(&self, rows: &[Vec<String>], col_idx: usize, data_type: &DataType) -> Result<ArrayRef, DataError> {
        let array: ArrayRef = match data_type {
            DataType::Boolean => {
                let mut builder = BooleanBuilder::new();
                for row in rows {
                    match self.cell(row, col_idx) {
                        Some(value) => builder.append_value(value.trim().eq_ignore_ascii_case("true")),
                        None => builder.append_null(),
                    }
                }
                Arc::new(builder.finish())
            }
            DataType::Int64 => {
                let mut builder = Int64Builder::new();
                for row in rows {
                    builder.append_option(self.cell(row, col_idx).and_then(|v| v.trim().parse::<i64>().ok()));
                }
                Arc::new(builder.finish())
            }
            DataType::Float64 => {
                let mut builder = Float64Builder::new();
                for row in rows {
                    builder.append_option(self.cell(row, col_idx).and_then(|v| v.trim().parse::<f64>().ok()));
                }
                Arc::new(builder.finish())
            }
            DataType::Utf8 => {
                let mut builder = StringBuilder::new();
                for row in rows {
                    builder.append_option(self.cell(row, col_idx));
                }
                Arc::new(builder.finish())
            }
            other => {
                return Err(DataError::SchemaDetection(format!("unexpected column type {:?}", other)));
            }
        };

        Ok(array)
    }
}

impl Default for SchemaDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Make header names usable as column keys.
///
/// Blank headers become `Unnamed: {index}`; repeats get `.1`, `.2`, ...
pub fn unique_headers(headers: &[String]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(headers.len());

    for (idx, header) in headers.iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header.clone()
        };

        let mut name = base.clone();
        while used.contains(&name) {
            let count = repeats.entry(base.clone()).or_insert(0);
            *count += 1;
            name = format!("{}.{}", base, count);
        }

        used.insert(name.clone());
        names.push(name);
    }

    names
}
