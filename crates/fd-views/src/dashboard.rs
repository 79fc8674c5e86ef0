//! Dashboard context and per-dataset page composition

use indexmap::IndexMap;

use fd_core::{DashboardConfig, DatasetDescriptor, DatasetId, DiagnosticLog};
use fd_data::Table;

use crate::page::{Page, PageSink};
use crate::plots::correlation::HEATMAP_TITLE;
use crate::plots::{render_categorical_distribution, render_correlation_heatmap, render_ordinal_score_distribution};
use crate::tables::render_column_inventory;

/// Heading above the column list
pub const COLUMNS_HEADING: &str = "Available Columns in Dataset";

/// Everything loaded at startup, passed explicitly to page composition.
///
/// Tables are read-only once loaded. A dataset whose resource failed to load
/// maps to `None` and keeps its failure in `diagnostics`.
#[derive(Debug)]
pub struct DashboardContext {
    config: DashboardConfig,
    tables: IndexMap<DatasetId, Option<Table>>,
    diagnostics: DiagnosticLog,
}

impl DashboardContext {
    /// Load every configured dataset eagerly, in configuration order
    pub fn load(config: DashboardConfig) -> Self {
        let mut diagnostics = DiagnosticLog::new();
        let mut tables = IndexMap::new();

        for descriptor in &config.datasets {
            let table = fd_data::load(&descriptor.resource, &mut diagnostics);
            tables.insert(descriptor.id, table);
        }

        let loaded = tables.values().filter(|t| t.is_some()).count();
        tracing::info!("Loaded {} of {} datasets", loaded, tables.len());

        Self {
            config,
            tables,
            diagnostics,
        }
    }

    /// Context over tables that are already in memory
    pub fn from_tables(
        config: DashboardConfig,
        tables: IndexMap<DatasetId, Option<Table>>,
        diagnostics: DiagnosticLog,
    ) -> Self {
        Self {
            config,
            tables,
            diagnostics,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn descriptor(&self, id: DatasetId) -> Option<&DatasetDescriptor> {
        self.config.descriptor(id)
    }

    pub fn table(&self, id: DatasetId) -> Option<&Table> {
        self.tables.get(&id).and_then(|t| t.as_ref())
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Datasets in sidebar order
    pub fn dataset_ids(&self) -> Vec<DatasetId> {
        self.config.dataset_ids().collect()
    }
}

/// Append the page for dataset `id` to `sink`.
///
/// When the dataset's table is absent, only its stored load diagnostics are
/// emitted.
pub fn compose_page(ctx: &DashboardContext, id: DatasetId, sink: &mut dyn PageSink) {
    let Some(descriptor) = ctx.descriptor(id) else {
        tracing::warn!("No descriptor for dataset {}", id);
        return;
    };

    let Some(table) = ctx.table(id) else {
        for diagnostic in ctx.diagnostics().for_resource(&descriptor.resource) {
            sink.diagnostic(diagnostic.clone());
        }
        return;
    };

    sink.title(&descriptor.title);

    if descriptor.show_inventory {
        sink.subheading(COLUMNS_HEADING);
        render_column_inventory(sink, Some(table), ctx.config().settings.preview_rows);
    }

    for chart in &descriptor.categorical_charts {
        sink.subheading(&chart.subheading);
        render_categorical_distribution(sink, Some(table), &chart.column, &chart.title);
    }

    if let Some(chart) = &descriptor.ordinal_chart {
        sink.subheading(&chart.subheading);
        render_ordinal_score_distribution(sink, Some(table), chart);
    }

    if descriptor.has_heatmap {
        sink.subheading(HEATMAP_TITLE);
        render_correlation_heatmap(sink, Some(table));
    }
}

/// The composed page for the current selection, rebuilt only when the
/// selection changes
#[derive(Debug, Default)]
pub struct DashboardPage {
    selected: Option<DatasetId>,
    page: Page,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<DatasetId> {
        self.selected
    }

    pub fn page_for(&mut self, ctx: &DashboardContext, id: DatasetId) -> &Page {
        if self.selected != Some(id) {
            tracing::debug!("Composing page for {}", id);
            let mut page = Page::new();
            compose_page(ctx, id, &mut page);
            self.page = page;
            self.selected = Some(id);
        }
        &self.page
    }
}
