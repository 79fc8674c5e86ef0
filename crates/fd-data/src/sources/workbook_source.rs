use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::{NaiveDateTime, Timelike};

use fd_core::ResourceRef;

use crate::DataError;
use super::{RawTable, TableSource};

/// Spreadsheet workbook source (xlsx, xlsm, xlsb, xls, ods).
///
/// Reads the first worksheet only.
/// The first row of the used range is the header row.
pub struct WorkbookSource {
    resource: ResourceRef,
}

impl WorkbookSource {
    pub fn new(resource: ResourceRef) -> Self {
        Self { resource }
    }
}

impl TableSource for WorkbookSource {
    fn read(&self) -> Result<RawTable, DataError> {
        let mut workbook = open_workbook_auto(self.resource.path())?;

        let range = workbook.worksheet_range_at(0).ok_or(DataError::EmptyWorkbook)??;

        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(header_row) => header_row.iter().map(cell_to_string).collect::<Vec<_>>(),
            None => return Ok(RawTable::default()),
        };

        let rows = rows
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        tracing::debug!(
            "Read {} worksheet rows with {} headers from {}",
            rows.len(),
            headers.len(),
            self.resource
        );

        Ok(RawTable::new(headers, rows))
    }

    fn source_name(&self) -> &str {
        self.resource.file_name()
    }
}

/// Render a worksheet cell as the text the schema detector sees
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(format_datetime)
            .unwrap_or_else(|| cell.to_string()),
    }
}

/// Whole numbers stored as floats print without a fractional part
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn format_datetime(value: NaiveDateTime) -> String {
    if value.hour() == 0 && value.minute() == 0 && value.second() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
