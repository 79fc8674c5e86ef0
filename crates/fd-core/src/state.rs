//! Application settings and dashboard configuration

use serde::{Serialize, Deserialize};

use crate::dataset::{DatasetDescriptor, DatasetId};

/// Rows shown in a data preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Number of head rows in the data preview
    pub preview_rows: usize,

    /// Whether to use dark mode
    pub dark_mode: bool,

    /// Default width of the navigation sidebar
    pub sidebar_width: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            dark_mode: true,
            sidebar_width: 260.0,
        }
    }
}

/// The fixed set of datasets plus settings, built once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub datasets: Vec<DatasetDescriptor>,
    #[serde(default)]
    pub settings: AppSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            datasets: DatasetDescriptor::builtin(),
            settings: AppSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Look up the descriptor for a dataset
    pub fn descriptor(&self, id: DatasetId) -> Option<&DatasetDescriptor> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Dataset ids in sidebar order
    pub fn dataset_ids(&self) -> impl Iterator<Item = DatasetId> + '_ {
        self.datasets.iter().map(|d| d.id)
    }
}
