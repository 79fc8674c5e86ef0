//! Page composition and chart rendering for the feedback dashboard
//!
//! Render operations append to a [`PageSink`]; the composed [`Page`] is
//! drawn by the UI shell with the `show_*` widgets re-exported here.

pub mod dashboard;
pub mod figure;
pub mod page;
pub mod plots;
pub mod tables;

pub use dashboard::{compose_page, DashboardContext, DashboardPage, COLUMNS_HEADING};
pub use figure::{BarFigure, BarOrientation, Figure, FigureKind, HeatmapFigure};
pub use page::{Page, PageElement, PageSink};
pub use plots::{
    render_categorical_distribution, render_correlation_heatmap, render_ordinal_score_distribution,
    show_bar_figure, show_heatmap_figure,
};
pub use tables::{render_column_inventory, show_column_list, show_preview, TablePreview};
