//! Stable widget ids for page elements
//!
//! Pages for different datasets reuse figure titles and preview widgets, so
//! every scroll area and plot is keyed by dataset and element position.

use egui::Id;
use std::fmt::Display;

use fd_core::DatasetId;

/// Widget ID builder that joins its components with `_`
#[derive(Debug, Clone)]
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Root id for everything drawn on one dataset's page
    pub fn for_dataset(id: DatasetId) -> Self {
        Self::new("page").with(id.key())
    }

    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Position of an element within the page
    pub fn element(self, index: usize) -> Self {
        self.with(format!("el_{}", index))
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }

    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}
