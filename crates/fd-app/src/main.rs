//! Main application entry point

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fd_core::{DashboardConfig, DatasetId};
use fd_ui::{NavigationPanel, ShellConfig, Theme};
use fd_views::{DashboardContext, DashboardPage};

/// Main application state
struct FeedbackDashboardApp {
    /// Tables and load diagnostics, fixed after startup
    context: DashboardContext,

    /// Datasets in sidebar order
    datasets: Vec<DatasetId>,

    /// Current sidebar selection
    selected: DatasetId,

    /// Page for the current selection
    page: DashboardPage,

    navigation_panel: NavigationPanel,
    shell_config: ShellConfig,
}

impl FeedbackDashboardApp {
    fn new(cc: &eframe::CreationContext<'_>, context: DashboardContext) -> Self {
        let settings = &context.config().settings;
        let theme = if settings.dark_mode {
            Theme::default()
        } else {
            Theme::light()
        };
        fd_ui::apply_theme(&cc.egui_ctx, &theme);

        let shell_config = ShellConfig {
            sidebar_width: settings.sidebar_width,
        };

        let datasets = context.dataset_ids();
        let selected = datasets.first().copied().unwrap_or(DatasetId::ToolsFeedback);

        Self {
            context,
            datasets,
            selected,
            page: DashboardPage::new(),
            navigation_panel: NavigationPanel::new(),
            shell_config,
        }
    }
}

impl eframe::App for FeedbackDashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        fd_ui::sidebar(
            ctx,
            &self.shell_config,
            &self.navigation_panel,
            &self.datasets,
            &mut self.selected,
        );

        let page = self.page.page_for(&self.context, self.selected);
        fd_ui::central_panel(ctx, self.selected, page);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting AI feedback dashboard");

    // Every resource is read before the window opens
    let context = DashboardContext::load(DashboardConfig::default());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "AI User Feedback Analysis",
        options,
        Box::new(move |cc| Box::new(FeedbackDashboardApp::new(cc, context))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
