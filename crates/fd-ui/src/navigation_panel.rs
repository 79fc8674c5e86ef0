//! Sidebar with the dataset selector

use egui::{RichText, Ui};

use fd_core::DatasetId;

use crate::theme::accent_color;

/// Sidebar configuration
#[derive(Debug, Clone)]
pub struct NavigationPanelConfig {
    /// Heading at the top of the sidebar
    pub title: String,

    /// Label above the dataset radio list
    pub selector_label: String,

    /// Informational footer below the selector
    pub footer: String,
}

impl Default for NavigationPanelConfig {
    fn default() -> Self {
        Self {
            title: "📊 AI User Feedback Analysis".to_string(),
            selector_label: "Select Dataset".to_string(),
            footer: "Developed for AI Tools Matchmaking Analysis.".to_string(),
        }
    }
}

/// Dataset selector shown in the left side panel
#[derive(Debug, Clone, Default)]
pub struct NavigationPanel {
    config: NavigationPanelConfig,
}

impl NavigationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationPanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &NavigationPanelConfig {
        &self.config
    }

    /// Draw the sidebar; returns true when the selection changed
    pub fn ui(&self, ui: &mut Ui, datasets: &[DatasetId], selected: &mut DatasetId) -> bool {
        ui.add_space(8.0);
        ui.heading(RichText::new(&self.config.title).color(accent_color()));
        ui.separator();

        ui.label(RichText::new(&self.config.selector_label).strong());

        let before = *selected;
        for id in datasets {
            ui.radio_value(selected, *id, id.label());
        }

        let changed = before != *selected;
        if changed {
            tracing::info!("Selected dataset: {}", selected);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.label(RichText::new(&self.config.footer).small().weak());

        changed
    }
}
