//! Best-effort resource loading

use fd_core::{Diagnostic, DiagnosticLog, ResourceRef};
use tracing::info;

use crate::sources::source_for;
use crate::table::Table;
use crate::DataError;

/// Load a resource, degrading any failure to a diagnostic.
///
/// Returns `None` and records exactly one `ResourceLoadFailure` naming the
/// resource when it cannot be opened or parsed.
pub fn load(resource: &ResourceRef, diagnostics: &mut DiagnosticLog) -> Option<Table> {
    match try_load(resource) {
        Ok(table) => {
            info!(
                "Loaded {} with {} rows and {} columns",
                resource,
                table.num_rows(),
                table.num_columns()
            );
            Some(table)
        }
        Err(e) => {
            diagnostics.push(Diagnostic::resource_load_failure(resource, &e));
            None
        }
    }
}

/// Load a resource, propagating the error
pub fn try_load(resource: &ResourceRef) -> Result<Table, DataError> {
    let source = source_for(resource)?;
    let raw = source.read()?;
    Table::from_raw(source.source_name(), &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use arrow::datatypes::DataType;
    use fd_core::DiagnosticKind;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;

    fn xlsx_path(dir: &tempfile::TempDir, name: &str) -> ResourceRef {
        ResourceRef::new(dir.path().join(name))
    }

    fn row_text(table: &Table, row: usize) -> Vec<String> {
        (0..table.num_columns()).map(|col| table.cell_text(row, col)).collect()
    }

    #[test]
    fn test_missing_file_degrades_to_one_diagnostic() {
        let resource = ResourceRef::new("data/definitely_missing.xlsx");
        let mut diagnostics = DiagnosticLog::new();

        let table = load(&resource, &mut diagnostics);

        assert!(table.is_none());
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::ResourceLoadFailure);
        assert!(diagnostic.names_resource(&resource));
        assert!(diagnostic.message.contains("data/definitely_missing.xlsx"));
    }

    #[test]
    fn test_each_failure_is_reported_separately() {
        let mut garbage = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        garbage.write_all(b"not a workbook").unwrap();

        let resources = [
            ResourceRef::new(garbage.path()),
            ResourceRef::new("data/notes.txt"),
            ResourceRef::new("data/missing.csv"),
        ];
        let mut diagnostics = DiagnosticLog::new();

        for resource in &resources {
            assert!(load(resource, &mut diagnostics).is_none());
        }

        assert_eq!(diagnostics.len(), 3);
        for resource in &resources {
            assert_eq!(diagnostics.for_resource(resource).count(), 1);
        }
    }

    #[test]
    fn test_csv_loads_into_typed_table() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Occupation,Trust in AI (Scale 1-10)").unwrap();
        writeln!(file, "Librarian,7").unwrap();
        writeln!(file, "Engineer,9").unwrap();

        let resource = ResourceRef::new(file.path());
        let mut diagnostics = DiagnosticLog::new();
        let table = load(&resource, &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(table.num_rows(), 2);
        assert!(table.has_column("Trust in AI (Scale 1-10)"));
        assert_eq!(table.numeric_column_names(), vec!["Trust in AI (Scale 1-10)"]);
    }

    #[test]
    fn test_workbook_first_sheet_loads_with_typed_columns() {
        let dir = tempfile::tempdir().unwrap();
        let resource = xlsx_path(&dir, "behavior.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Occupation").unwrap();
        sheet.write_string(0, 1, "Trust in AI (Scale 1-10)").unwrap();
        sheet.write_string(0, 2, "Hours").unwrap();
        sheet.write_string(1, 0, "Librarian").unwrap();
        sheet.write_number(1, 1, 7.0).unwrap();
        sheet.write_number(1, 2, 1.5).unwrap();
        sheet.write_string(2, 0, "Engineer").unwrap();
        sheet.write_number(2, 1, 9.0).unwrap();
        sheet.write_number(2, 2, 4.25).unwrap();
        let other = workbook.add_worksheet();
        other.write_string(0, 0, "Ignored").unwrap();
        workbook.save(resource.path()).unwrap();

        let mut diagnostics = DiagnosticLog::new();
        let table = load(&resource, &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(table.column_names(), vec!["Occupation", "Trust in AI (Scale 1-10)", "Hours"]);
        assert_eq!(table.numeric_column_names(), vec!["Trust in AI (Scale 1-10)", "Hours"]);
        assert_eq!(table.column("Trust in AI (Scale 1-10)").unwrap().data_type(), &DataType::Int64);
        assert_eq!(table.column("Hours").unwrap().data_type(), &DataType::Float64);

        let head = table.head(5);
        assert_eq!(head.num_rows(), 2);
        assert_eq!(row_text(&head, 0), vec!["Librarian", "7", "1.5"]);
        assert_eq!(row_text(&head, 1), vec!["Engineer", "9", "4.25"]);
    }

    #[test]
    fn test_workbook_blank_header_is_named_by_position() {
        let dir = tempfile::tempdir().unwrap();
        let resource = xlsx_path(&dir, "tools.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 1, "Tool").unwrap();
        sheet.write_number(1, 0, 1.0).unwrap();
        sheet.write_string(1, 1, "ChatGPT").unwrap();
        workbook.save(resource.path()).unwrap();

        let mut diagnostics = DiagnosticLog::new();
        let table = load(&resource, &mut diagnostics).unwrap();

        assert_eq!(table.column_names(), vec!["Unnamed: 0", "Tool"]);
        assert_eq!(row_text(&table, 0), vec!["1", "ChatGPT"]);
    }

    #[test]
    fn test_workbook_headers_come_from_first_used_row() {
        let dir = tempfile::tempdir().unwrap();
        let resource = xlsx_path(&dir, "merged.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(1, 0, "Tool").unwrap();
        sheet.write_string(1, 1, "Score").unwrap();
        sheet.write_string(2, 0, "Copilot").unwrap();
        sheet.write_number(2, 1, 6.0).unwrap();
        workbook.save(resource.path()).unwrap();

        let mut diagnostics = DiagnosticLog::new();
        let table = load(&resource, &mut diagnostics).unwrap();

        assert_eq!(table.column_names(), vec!["Tool", "Score"]);
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.numeric_column_names(), vec!["Score"]);
    }
}
