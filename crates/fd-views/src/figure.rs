//! Explicit figure handles produced by the render operations

/// Which axis the bars extend along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOrientation {
    /// Categories on the vertical axis, counts along the horizontal one
    Horizontal,
    /// Categories on the horizontal axis, counts upwards
    Vertical,
}

/// Bar chart data, categories in display order
#[derive(Debug, Clone, PartialEq)]
pub struct BarFigure {
    pub orientation: BarOrientation,
    pub categories: Vec<String>,
    pub counts: Vec<usize>,
}

impl BarFigure {
    /// (category, count) pairs in display order
    pub fn bars(&self) -> impl Iterator<Item = (&str, usize)> {
        self.categories
            .iter()
            .map(|c| c.as_str())
            .zip(self.counts.iter().copied())
    }
}

/// Correlation grid over a table's numeric columns
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapFigure {
    pub labels: Vec<String>,
    /// Row-major coefficients, `None` where undefined
    pub matrix: Vec<Vec<Option<f64>>>,
    /// Fixed color range, centered on zero
    pub range: (f64, f64),
}

impl HeatmapFigure {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.matrix.get(row)?.get(col).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FigureKind {
    Bar(BarFigure),
    Heatmap(HeatmapFigure),
}

/// One chart attached to a page
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Stable id, unique within a page
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: FigureKind,
}

impl Figure {
    pub fn as_bar(&self) -> Option<&BarFigure> {
        match &self.kind {
            FigureKind::Bar(bar) => Some(bar),
            _ => None,
        }
    }

    pub fn as_heatmap(&self) -> Option<&HeatmapFigure> {
        match &self.kind {
            FigureKind::Heatmap(heatmap) => Some(heatmap),
            _ => None,
        }
    }
}
