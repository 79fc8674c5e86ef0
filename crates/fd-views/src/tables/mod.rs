//! Column inventory and head-of-table preview

use egui::{RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use fd_data::Table;

use crate::page::PageSink;

/// Heading between the column list and the preview grid
pub const PREVIEW_HEADING: &str = "Data Preview";

/// First rows of a table, rendered as text
#[derive(Debug, Clone, PartialEq)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Row count of the full table
    pub total_rows: usize,
}

impl TablePreview {
    /// Up to `n` leading rows in table order
    pub fn from_table(table: &Table, n: usize) -> Self {
        let head = table.head(n);
        let rows = (0..head.num_rows())
            .map(|row| {
                (0..head.num_columns())
                    .map(|col| head.cell_text(row, col))
                    .collect()
            })
            .collect();

        Self {
            columns: table.column_names(),
            rows,
            total_rows: table.num_rows(),
        }
    }
}

/// Attach the table's column names followed by its first `preview_rows` rows.
///
/// Renders nothing for an absent table.
pub fn render_column_inventory(sink: &mut dyn PageSink, table: Option<&Table>, preview_rows: usize) {
    let Some(table) = table else {
        return;
    };

    sink.column_list(table.column_names());
    sink.subheading(PREVIEW_HEADING);
    sink.preview(TablePreview::from_table(table, preview_rows));
}

/// Column names as a wrapped list
pub fn show_column_list(ui: &mut Ui, columns: &[String]) {
    if columns.is_empty() {
        ui.label(RichText::new("No columns").weak());
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for name in columns {
            ui.label(RichText::new(name).code());
        }
    });
}

/// Preview grid with a row-number column
pub fn show_preview(ui: &mut Ui, preview: &TablePreview, id: &str) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;

    ui.label(
        RichText::new(format!(
            "Showing {} of {} rows",
            preview.rows.len(),
            preview.total_rows
        ))
        .small()
        .weak(),
    );

    ScrollArea::horizontal().id_source(id).show(ui, |ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .vscroll(false)
            .column(Column::initial(40.0).at_least(30.0));

        for _ in &preview.columns {
            builder = builder.column(Column::initial(150.0).at_least(80.0).at_most(400.0).clip(true));
        }

        builder
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in &preview.columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, preview.rows.len(), |row_index, mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(row_index.to_string()).weak());
                    });
                    for cell in &preview.rows[row_index] {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}
