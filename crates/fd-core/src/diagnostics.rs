//! Non-fatal, user-visible diagnostics

use std::fmt;

use crate::dataset::ResourceRef;

/// The two ways a page can degrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A resource could not be opened or parsed
    ResourceLoadFailure,
    /// A chart's column is missing from a loaded table
    ColumnNotFound,
}

/// How a diagnostic banner is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A message surfaced instead of a failed load or a skipped chart
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// The resource that failed to load
    pub resource: Option<ResourceRef>,
    /// The column that was probed and not found
    pub column: Option<String>,
    /// The chart that was skipped
    pub chart_title: Option<String>,
}

impl Diagnostic {
    pub fn resource_load_failure(resource: &ResourceRef, error: impl fmt::Display) -> Self {
        Self {
            kind: DiagnosticKind::ResourceLoadFailure,
            message: format!("Error loading {}: {}", resource, error),
            resource: Some(resource.clone()),
            column: None,
            chart_title: None,
        }
    }

    pub fn column_not_found(column: &str, chart_title: &str) -> Self {
        Self {
            kind: DiagnosticKind::ColumnNotFound,
            message: format!("Column '{}' not found in the dataset.", column),
            resource: None,
            column: Some(column.to_string()),
            chart_title: Some(chart_title.to_string()),
        }
    }

    /// Missing score column of an ordinal chart
    pub fn score_column_not_found(column: &str, chart_title: &str) -> Self {
        Self {
            message: format!("Column '{}' not found.", column),
            ..Self::column_not_found(column, chart_title)
        }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::ResourceLoadFailure => Severity::Error,
            DiagnosticKind::ColumnNotFound => Severity::Warning,
        }
    }

    pub fn names_resource(&self, resource: &ResourceRef) -> bool {
        self.resource.as_ref() == Some(resource)
    }

    pub fn names_column(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }
}

/// Banner text; a skipped chart is named after the message
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(title) = &self.chart_title {
            write!(f, " (chart: {})", title)?;
        }
        Ok(())
    }
}

/// Diagnostics collected while loading resources at startup
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => tracing::error!("{}", diagnostic),
            Severity::Warning => tracing::warn!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics that name the given resource
    pub fn for_resource<'a>(&'a self, resource: &'a ResourceRef) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries.iter().filter(move |d| d.names_resource(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_names_resource() {
        let resource = ResourceRef::new("data/missing.xlsx");
        let diagnostic = Diagnostic::resource_load_failure(&resource, "No such file");

        assert_eq!(diagnostic.severity(), Severity::Error);
        assert!(diagnostic.names_resource(&resource));
        assert_eq!(diagnostic.to_string(), "Error loading data/missing.xlsx: No such file");
    }

    #[test]
    fn test_column_not_found_is_a_warning() {
        let diagnostic = Diagnostic::column_not_found("Age Group", "Distribution of Age Groups");

        assert_eq!(diagnostic.severity(), Severity::Warning);
        assert!(diagnostic.names_column("Age Group"));
        assert_eq!(diagnostic.chart_title.as_deref(), Some("Distribution of Age Groups"));
        assert_eq!(diagnostic.message, "Column 'Age Group' not found in the dataset.");
        assert_eq!(
            diagnostic.to_string(),
            "Column 'Age Group' not found in the dataset. (chart: Distribution of Age Groups)"
        );
    }

    #[test]
    fn test_score_column_message_is_short() {
        let diagnostic = Diagnostic::score_column_not_found("Trust in AI (Scale 1-10)", "Trust in AI");

        assert_eq!(diagnostic.kind, DiagnosticKind::ColumnNotFound);
        assert!(diagnostic.names_column("Trust in AI (Scale 1-10)"));
        assert_eq!(diagnostic.message, "Column 'Trust in AI (Scale 1-10)' not found.");
    }

    #[test]
    fn test_log_filters_by_resource() {
        let a = ResourceRef::new("a.xlsx");
        let b = ResourceRef::new("b.xlsx");
        let mut log = DiagnosticLog::new();
        log.push(Diagnostic::resource_load_failure(&a, "bad zip"));
        log.push(Diagnostic::resource_load_failure(&b, "bad zip"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.for_resource(&a).count(), 1);
        assert_eq!(log.for_resource(&ResourceRef::new("c.xlsx")).count(), 0);
    }
}
