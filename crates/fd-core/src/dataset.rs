//! Dataset identities and the per-dataset page descriptors

use std::fmt;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

/// Path naming a tabular data source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(PathBuf);

impl ResourceRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Lower-cased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.0
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    /// File name used when labelling loaded tables
    pub fn file_name(&self) -> &str {
        self.0
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for ResourceRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// The three survey datasets offered in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatasetId {
    ToolsFeedback,
    UserBehavior,
    MergedFeedback,
}

impl DatasetId {
    /// Sidebar order
    pub const ALL: [DatasetId; 3] = [
        DatasetId::ToolsFeedback,
        DatasetId::UserBehavior,
        DatasetId::MergedFeedback,
    ];

    /// Label shown in the navigation list
    pub fn label(&self) -> &'static str {
        match self {
            DatasetId::ToolsFeedback => "AI Tools User Feedback",
            DatasetId::UserBehavior => "AI User Behavior",
            DatasetId::MergedFeedback => "AI Merged User Feedback",
        }
    }

    /// Stable key used for widget ids
    pub fn key(&self) -> &'static str {
        match self {
            DatasetId::ToolsFeedback => "tools_feedback",
            DatasetId::UserBehavior => "user_behavior",
            DatasetId::MergedFeedback => "merged_feedback",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A nominal column rendered most-frequent-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalChart {
    pub subheading: String,
    pub column: String,
    pub title: String,
}

impl CategoricalChart {
    pub fn new(subheading: &str, column: &str, title: &str) -> Self {
        Self {
            subheading: subheading.to_string(),
            column: column.to_string(),
            title: title.to_string(),
        }
    }
}

/// A fixed-scale score column rendered in ascending score order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalChart {
    pub subheading: String,
    pub column: String,
    pub title: String,
    /// Label of the score axis
    pub axis_label: String,
}

impl OrdinalChart {
    pub fn new(subheading: &str, column: &str, title: &str, axis_label: &str) -> Self {
        Self {
            subheading: subheading.to_string(),
            column: column.to_string(),
            title: title.to_string(),
            axis_label: axis_label.to_string(),
        }
    }
}

/// Everything the page composer needs to know about one dataset.
///
/// The set and order of probed columns is fixed here, never discovered
/// from the loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub id: DatasetId,
    /// Page heading
    pub title: String,
    pub resource: ResourceRef,
    /// Whether the page starts with the column list and preview
    #[serde(default = "default_true")]
    pub show_inventory: bool,
    #[serde(default)]
    pub categorical_charts: Vec<CategoricalChart>,
    #[serde(default)]
    pub ordinal_chart: Option<OrdinalChart>,
    #[serde(default)]
    pub has_heatmap: bool,
}

fn default_true() -> bool {
    true
}

impl DatasetDescriptor {
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// The built-in descriptors, in sidebar order
    pub fn builtin() -> Vec<DatasetDescriptor> {
        vec![
            DatasetDescriptor {
                id: DatasetId::ToolsFeedback,
                title: "AI Tools User Feedback Analysis".to_string(),
                resource: ResourceRef::new("data/AI_Tools_User_Feedback_Responses.xlsx"),
                show_inventory: true,
                categorical_charts: vec![
                    CategoricalChart::new("Age Group Distribution", "Age Group", "Distribution of Age Groups"),
                    CategoricalChart::new("Professions of Users", "Profession/Industry", "Distribution of Professions"),
                    CategoricalChart::new("AI Usage Rate", "AI Tools Used", "Most Used AI Tools"),
                ],
                ordinal_chart: Some(OrdinalChart::new(
                    "Satisfaction Level",
                    "Overall AI Satisfaction (Scale 1-10)",
                    "AI Satisfaction Level",
                    "Satisfaction Score",
                )),
                has_heatmap: true,
            },
            DatasetDescriptor {
                id: DatasetId::UserBehavior,
                title: "AI User Behavior Analysis".to_string(),
                resource: ResourceRef::new("data/AI_User_Behavior_Responses.xlsx"),
                show_inventory: true,
                categorical_charts: vec![
                    CategoricalChart::new("Occupation Distribution", "Occupation", "Occupations of AI Users"),
                    CategoricalChart::new("AI Usage Frequency", "AI Usage Frequency", "How Often Users Use AI"),
                ],
                ordinal_chart: Some(OrdinalChart::new(
                    "Trust in AI",
                    "Trust in AI (Scale 1-10)",
                    "Trust in AI",
                    "Trust Score",
                )),
                has_heatmap: true,
            },
            DatasetDescriptor {
                id: DatasetId::MergedFeedback,
                title: "AI Merged User Feedback Analysis".to_string(),
                resource: ResourceRef::new("data/AI_Merged_User_Feedback_Responses.xlsx"),
                show_inventory: true,
                categorical_charts: vec![
                    CategoricalChart::new("AI Tools Used by Users", "AI Tools Used", "Most Commonly Used AI Tools"),
                    CategoricalChart::new("Challenges in AI Usage", "Challenges in AI Usage", "Common AI Challenges"),
                    CategoricalChart::new("AI Necessity in Workflows", "AI Necessity", "How Users View AI as Necessary"),
                ],
                ordinal_chart: None,
                has_heatmap: true,
            },
        ]
    }
}
