//! Correlation heatmap over a table's numeric columns

use egui::{pos2, vec2, Align2, Color32, FontId, Rect, RichText, Sense, Stroke, Ui};

use fd_data::Table;

use crate::figure::{Figure, FigureKind, HeatmapFigure};
use crate::page::PageSink;
use crate::plots::utils::{correlation_color, correlation_matrix};

/// Heading of every correlation heatmap
pub const HEATMAP_TITLE: &str = "Feature Correlation Heatmap";

/// Coefficients always share one color range
const CORRELATION_RANGE: (f64, f64) = (-1.0, 1.0);

/// Attach a Pearson correlation heatmap of all numeric columns.
///
/// An absent table renders nothing; its load failure was already reported.
/// Fewer than two numeric columns still produce a (trivial) grid.
pub fn render_correlation_heatmap(sink: &mut dyn PageSink, table: Option<&Table>) {
    let Some(table) = table else {
        return;
    };

    sink.chart(correlation_figure(table));
}

/// Build the heatmap figure for a table
pub fn correlation_figure(table: &Table) -> Figure {
    let labels = table.numeric_column_names();
    let columns = labels
        .iter()
        .filter_map(|name| table.numeric_values(name))
        .collect::<Vec<_>>();

    let matrix = correlation_matrix(&columns);
    tracing::debug!("Correlation matrix over {} numeric columns of {}", labels.len(), table.name());

    Figure {
        id: format!("heatmap_{}", table.name()),
        title: HEATMAP_TITLE.to_string(),
        x_label: String::new(),
        y_label: String::new(),
        kind: FigureKind::Heatmap(HeatmapFigure {
            labels,
            matrix,
            range: CORRELATION_RANGE,
        }),
    }
}

/// Paint an annotated heatmap with row/column labels and a color bar
pub fn show_heatmap_figure(ui: &mut Ui, figure: &Figure, heatmap: &HeatmapFigure) {
    ui.label(RichText::new(&figure.title).strong());

    let n = heatmap.size();
    if n == 0 {
        ui.label(RichText::new("No numeric columns to correlate").weak());
        return;
    }

    let font = FontId::proportional(11.0);
    let text_color = ui.style().visuals.text_color();

    // Room for the longest label, measured in the label font
    let label_width = heatmap
        .labels
        .iter()
        .map(|label| {
            ui.fonts(|f| f.layout_no_wrap(label.clone(), font.clone(), text_color).size().x)
        })
        .fold(0.0_f32, f32::max)
        .min(220.0)
        + 8.0;

    let legend_width = 70.0;
    let available = ui.available_width() - label_width - legend_width;
    let cell_size = (available / n as f32).clamp(24.0, 64.0);
    let grid = cell_size * n as f32;

    let (response, painter) = ui.allocate_painter(
        vec2(label_width + grid + legend_width, label_width.min(120.0) + grid.max(60.0) + 8.0),
        Sense::hover(),
    );

    let rect = response.rect;
    let origin = rect.min + vec2(label_width, label_width.min(120.0));

    for row in 0..n {
        for col in 0..n {
            let cell_rect = Rect::from_min_size(
                origin + vec2(col as f32 * cell_size, row as f32 * cell_size),
                vec2(cell_size, cell_size),
            );

            match heatmap.value(row, col) {
                Some(value) => {
                    painter.rect_filled(cell_rect, 0.0, correlation_color(value, heatmap.range));

                    if cell_size > 20.0 {
                        let annotation_color = if value.abs() > 0.5 {
                            Color32::WHITE
                        } else {
                            Color32::BLACK
                        };
                        painter.text(
                            cell_rect.center(),
                            Align2::CENTER_CENTER,
                            format!("{:.2}", value),
                            FontId::proportional(10.0),
                            annotation_color,
                        );
                    }
                }
                None => {
                    painter.rect_filled(cell_rect, 0.0, Color32::from_gray(90));
                }
            }

            painter.rect_stroke(cell_rect, 0.0, Stroke::new(0.5, Color32::from_gray(60)));
        }

        // Row labels (left)
        painter.text(
            pos2(origin.x - 5.0, origin.y + (row as f32 + 0.5) * cell_size),
            Align2::RIGHT_CENTER,
            &heatmap.labels[row],
            font.clone(),
            text_color,
        );
    }

    // Column labels (top), staggered so neighbours do not overlap
    for col in 0..n {
        let lift = if col % 2 == 0 { 5.0 } else { 20.0 };
        painter.text(
            pos2(origin.x + (col as f32 + 0.5) * cell_size, origin.y - lift),
            Align2::CENTER_BOTTOM,
            &heatmap.labels[col],
            font.clone(),
            text_color,
        );
    }

    // Color scale legend
    let legend_height = grid.max(60.0);
    let legend_rect = Rect::from_min_size(
        pos2(origin.x + grid + 16.0, origin.y),
        vec2(16.0, legend_height),
    );
    let (min, max) = heatmap.range;
    let steps = 60;
    for i in 0..steps {
        let t = i as f32 / (steps - 1) as f32;
        let value = max - (max - min) * t as f64;
        let y = legend_rect.min.y + t * legend_rect.height();
        painter.line_segment(
            [pos2(legend_rect.min.x, y), pos2(legend_rect.max.x, y)],
            Stroke::new(legend_rect.height() / steps as f32 + 1.0, correlation_color(value, heatmap.range)),
        );
    }

    for (text, y, align) in [
        (format!("{:.1}", max), legend_rect.min.y, Align2::LEFT_TOP),
        ("0.0".to_string(), legend_rect.center().y, Align2::LEFT_CENTER),
        (format!("{:.1}", min), legend_rect.max.y, Align2::LEFT_BOTTOM),
    ] {
        painter.text(pos2(legend_rect.max.x + 5.0, y), align, text, FontId::proportional(10.0), Color32::GRAY);
    }
}
