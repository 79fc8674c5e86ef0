//! Side panel plus central page area

use egui::{CentralPanel, Context, Frame, Margin, RichText, ScrollArea, SidePanel, Stroke, Ui};

use fd_core::{DatasetId, Diagnostic};
use fd_views::{
    show_bar_figure, show_column_list, show_heatmap_figure, show_preview, FigureKind, Page,
    PageElement,
};

use crate::navigation_panel::NavigationPanel;
use crate::theme::severity_color;
use crate::widget_utils::WidgetId;

/// Prefix drawn before every section heading
pub const SUBHEADING_MARKER: &str = "📌 ";

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub sidebar_width: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { sidebar_width: 260.0 }
    }
}

/// Render the dataset sidebar; returns true when the selection changed
pub fn sidebar(
    ctx: &Context,
    config: &ShellConfig,
    panel: &NavigationPanel,
    datasets: &[DatasetId],
    selected: &mut DatasetId,
) -> bool {
    SidePanel::left("dataset_sidebar")
        .resizable(true)
        .default_width(config.sidebar_width)
        .show(ctx, |ui| panel.ui(ui, datasets, selected))
        .inner
}

/// Render the composed page in the central panel
pub fn central_panel(ctx: &Context, dataset: DatasetId, page: &Page) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_source(WidgetId::for_dataset(dataset).with("scroll").build())
            .auto_shrink([false, false])
            .show(ui, |ui| show_page(ui, dataset, page));
    });
}

/// Draw every page element in order
pub fn show_page(ui: &mut Ui, dataset: DatasetId, page: &Page) {
    for (index, element) in page.elements().iter().enumerate() {
        let id = WidgetId::for_dataset(dataset).element(index);
        ui.push_id(id.id(), |ui| show_element(ui, element, &id.build()));
    }
}

fn show_element(ui: &mut Ui, element: &PageElement, id: &str) {
    match element {
        PageElement::Title(text) => {
            ui.heading(RichText::new(text).strong());
            ui.add_space(4.0);
        }
        PageElement::Subheading(text) => {
            ui.add_space(12.0);
            ui.label(RichText::new(format!("{}{}", SUBHEADING_MARKER, text)).size(18.0).strong());
            ui.separator();
        }
        PageElement::ColumnList(columns) => show_column_list(ui, columns),
        PageElement::Preview(preview) => show_preview(ui, preview, id),
        PageElement::Chart(figure) => match &figure.kind {
            FigureKind::Bar(bars) => show_bar_figure(ui, figure, bars),
            FigureKind::Heatmap(heatmap) => show_heatmap_figure(ui, figure, heatmap),
        },
        PageElement::Diagnostic(diagnostic) => diagnostic_banner(ui, diagnostic),
    }
}

/// Colored banner for a load failure or missing column
pub fn diagnostic_banner(ui: &mut Ui, diagnostic: &Diagnostic) {
    let color = severity_color(diagnostic.severity());

    Frame::none()
        .fill(color.linear_multiply(0.15))
        .stroke(Stroke::new(1.0, color))
        .rounding(4.0)
        .inner_margin(Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(diagnostic.to_string()).color(color));
        });
    ui.add_space(4.0);
}
