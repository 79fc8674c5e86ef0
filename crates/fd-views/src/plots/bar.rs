//! Bar chart rendering for categorical and ordinal columns

use std::ops::RangeInclusive;
use egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use fd_core::{Diagnostic, OrdinalChart};
use fd_data::Table;

use crate::figure::{BarFigure, BarOrientation, Figure, FigureKind};
use crate::page::PageSink;
use crate::plots::utils::{palette_color, sort_by_count, sort_by_scale, value_counts, ValueCount};

/// Label of the count axis on every bar chart
pub const COUNT_LABEL: &str = "Count";

const BAR_WIDTH: f64 = 0.7;

/// Horizontal bars of a nominal column, most frequent category first.
///
/// Renders nothing and reports a `ColumnNotFound` diagnostic when the table
/// is absent or lacks the column.
pub fn render_categorical_distribution(
    sink: &mut dyn PageSink,
    table: Option<&Table>,
    column: &str,
    title: &str,
) {
    let Some(table) = table.filter(|t| t.has_column(column)) else {
        tracing::warn!("Column '{}' not found for chart '{}'", column, title);
        sink.diagnostic(Diagnostic::column_not_found(column, title));
        return;
    };

    let mut counts = column_counts(table, column);
    sort_by_count(&mut counts);
    tracing::debug!("'{}': {} categories", column, counts.len());

    sink.chart(bar_figure(
        table,
        column,
        title,
        COUNT_LABEL,
        "",
        BarOrientation::Horizontal,
        counts,
    ));
}

/// Vertical bars of a fixed-scale score column, in ascending score order
pub fn render_ordinal_score_distribution(
    sink: &mut dyn PageSink,
    table: Option<&Table>,
    chart: &OrdinalChart,
) {
    let column = chart.column.as_str();
    let Some(table) = table.filter(|t| t.has_column(column)) else {
        tracing::warn!("Column '{}' not found for chart '{}'", column, chart.title);
        sink.diagnostic(Diagnostic::score_column_not_found(column, &chart.title));
        return;
    };

    let mut counts = column_counts(table, column);
    sort_by_scale(&mut counts);
    tracing::debug!("'{}': {} score buckets", column, counts.len());

    sink.chart(bar_figure(
        table,
        column,
        &chart.title,
        &chart.axis_label,
        COUNT_LABEL,
        BarOrientation::Vertical,
        counts,
    ));
}

/// Counts of a column the caller has confirmed present
fn column_counts(table: &Table, column: &str) -> Vec<ValueCount> {
    table
        .text_values(column)
        .map(value_counts)
        .unwrap_or_default()
}

fn bar_figure(
    table: &Table,
    column: &str,
    title: &str,
    x_label: &str,
    y_label: &str,
    orientation: BarOrientation,
    counts: Vec<ValueCount>,
) -> Figure {
    let (categories, counts): (Vec<String>, Vec<usize>) = counts.into_iter().map(|c| (c.value, c.count)).unzip();

    Figure {
        id: format!("bar_{}_{}", table.name(), column),
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        kind: FigureKind::Bar(BarFigure {
            orientation,
            categories,
            counts,
        }),
    }
}

/// Draw a bar figure with category tick labels
pub fn show_bar_figure(ui: &mut Ui, figure: &Figure, bars: &BarFigure) {
    ui.label(RichText::new(&figure.title).strong());

    let n = bars.categories.len();
    if n == 0 {
        ui.label(RichText::new("No values to count").weak());
        return;
    }

    let horizontal = bars.orientation == BarOrientation::Horizontal;

    let chart_bars = bars
        .bars()
        .enumerate()
        .map(|(i, (category, count))| {
            Bar::new(bar_position(i, n, horizontal), count as f64)
                .width(BAR_WIDTH)
                .name(category)
                .fill(palette_color(i, n))
        })
        .collect::<Vec<_>>();

    let mut chart = BarChart::new(chart_bars)
        .name(&figure.title)
        .element_formatter(Box::new(|bar, _chart| format!("{}: {}", bar.name, bar.value)));
    if horizontal {
        chart = chart.horizontal();
    }

    let labels = bars.categories.clone();
    let ticks = move |value: f64, _max_chars: usize, _range: &RangeInclusive<f64>| {
        category_tick(&labels, value, horizontal)
    };

    let longest = bars.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    let height = if horizontal {
        (n as f32 * 28.0).clamp(220.0, 640.0)
    } else {
        280.0
    };

    let mut plot = Plot::new(&figure.id)
        .height(height)
        .show_grid(true)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(figure.x_label.clone())
        .y_axis_label(figure.y_label.clone());

    plot = if horizontal {
        plot.y_axis_formatter(ticks).y_axis_width(longest.clamp(3, 32))
    } else {
        plot.x_axis_formatter(ticks)
    };

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
    });
}

/// Axis position of bar `index`; horizontal charts list the first bar on top
fn bar_position(index: usize, count: usize, horizontal: bool) -> f64 {
    if horizontal {
        (count - 1 - index) as f64
    } else {
        index as f64
    }
}

/// Tick label for a category axis position, blank between bars
fn category_tick(labels: &[String], value: f64, horizontal: bool) -> String {
    let n = labels.len();
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 || rounded >= n as f64 {
        return String::new();
    }

    let position = rounded as usize;
    let index = if horizontal { n - 1 - position } else { position };
    labels[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use fd_core::DiagnosticKind;
    use fd_data::RawTable;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let raw = RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        );
        Table::from_raw("survey.xlsx", &raw).unwrap()
    }

    fn single_column(name: &str, values: &[&str]) -> Table {
        let rows: Vec<&[&str]> = values.iter().map(std::slice::from_ref).collect();
        table(&[name], &rows)
    }

    #[test]
    fn test_categories_most_frequent_first() {
        let table = single_column("Tool", &["A", "A", "B", "C", "C", "C"]);
        let mut page = Page::new();

        render_categorical_distribution(&mut page, Some(&table), "Tool", "Most Used AI Tools");

        let figures: Vec<_> = page.figures().collect();
        assert_eq!(figures.len(), 1);
        assert_eq!(page.diagnostics().count(), 0);

        let figure = figures[0];
        assert_eq!(figure.title, "Most Used AI Tools");
        assert_eq!(figure.x_label, COUNT_LABEL);
        let bars = figure.as_bar().unwrap();
        assert_eq!(bars.orientation, BarOrientation::Horizontal);
        assert_eq!(bars.bars().collect::<Vec<_>>(), vec![("C", 3), ("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_missing_column_gives_one_diagnostic() {
        let table = single_column("Tool", &["A"]);
        let mut page = Page::new();

        render_categorical_distribution(&mut page, Some(&table), "Age Group", "Distribution of Age Groups");

        assert_eq!(page.figures().count(), 0);
        let diagnostics: Vec<_> = page.diagnostics().collect();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::ColumnNotFound);
        assert!(diagnostics[0].names_column("Age Group"));
        assert_eq!(diagnostics[0].chart_title.as_deref(), Some("Distribution of Age Groups"));
    }

    #[test]
    fn test_absent_table_gives_one_diagnostic() {
        let mut page = Page::new();
        render_categorical_distribution(&mut page, None, "Occupation", "Occupations of AI Users");
        render_ordinal_score_distribution(
            &mut page,
            None,
            &OrdinalChart::new("Trust in AI", "Trust in AI (Scale 1-10)", "Trust in AI", "Trust Score"),
        );

        assert_eq!(page.figures().count(), 0);
        let messages: Vec<_> = page.diagnostics().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Column 'Occupation' not found in the dataset.",
                "Column 'Trust in AI (Scale 1-10)' not found.",
            ]
        );
    }

    #[test]
    fn test_scores_in_ascending_order() {
        let table = single_column("Overall AI Satisfaction (Scale 1-10)", &["3", "1", "3", "5", "1", "1"]);
        let chart = OrdinalChart::new(
            "Satisfaction Level",
            "Overall AI Satisfaction (Scale 1-10)",
            "AI Satisfaction Level",
            "Satisfaction Score",
        );
        let mut page = Page::new();

        render_ordinal_score_distribution(&mut page, Some(&table), &chart);

        let figure = page.figures().next().unwrap();
        assert_eq!(figure.x_label, "Satisfaction Score");
        assert_eq!(figure.y_label, COUNT_LABEL);
        let bars = figure.as_bar().unwrap();
        assert_eq!(bars.orientation, BarOrientation::Vertical);
        assert_eq!(bars.bars().collect::<Vec<_>>(), vec![("1", 3), ("3", 2), ("5", 1)]);
    }

    #[test]
    fn test_scores_order_numerically_past_nine() {
        let table = single_column("Trust", &["10", "9", "2", "10"]);
        let chart = OrdinalChart::new("Trust", "Trust", "Trust in AI", "Trust Score");
        let mut page = Page::new();

        render_ordinal_score_distribution(&mut page, Some(&table), &chart);

        let bars = page.figures().next().unwrap().as_bar().unwrap().clone();
        assert_eq!(bars.categories, vec!["2", "9", "10"]);
    }

    #[test]
    fn test_null_cells_are_not_counted() {
        let table = table(&["Tool", "Other"], &[&["A", "x"], &["", "y"], &["A", "z"]]);
        let mut page = Page::new();

        render_categorical_distribution(&mut page, Some(&table), "Tool", "Tools");

        let bars = page.figures().next().unwrap().as_bar().unwrap().clone();
        assert_eq!(bars.bars().collect::<Vec<_>>(), vec![("A", 2)]);
    }

    #[test]
    fn test_tick_labels_follow_bar_positions() {
        let labels = vec!["C".to_string(), "A".to_string(), "B".to_string()];

        assert_eq!(bar_position(0, 3, true), 2.0);
        assert_eq!(category_tick(&labels, 2.0, true), "C");
        assert_eq!(category_tick(&labels, 0.0, true), "B");
        assert_eq!(category_tick(&labels, 0.0, false), "C");
        assert_eq!(category_tick(&labels, 0.5, false), "");
        assert_eq!(category_tick(&labels, 3.0, false), "");
        assert_eq!(category_tick(&labels, -1.0, true), "");
    }
}
