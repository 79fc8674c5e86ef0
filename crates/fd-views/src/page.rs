//! Output surface the render operations append to

use fd_core::Diagnostic;

use crate::figure::Figure;
use crate::tables::TablePreview;

/// Receives renderable elements in page order
pub trait PageSink {
    /// Page heading
    fn title(&mut self, text: &str);

    /// Section heading
    fn subheading(&mut self, text: &str);

    /// Column names, verbatim and in table order
    fn column_list(&mut self, columns: Vec<String>);

    /// Head rows of a table
    fn preview(&mut self, preview: TablePreview);

    /// A chart
    fn chart(&mut self, figure: Figure);

    /// A warning or error banner
    fn diagnostic(&mut self, diagnostic: Diagnostic);
}

/// A renderable element
#[derive(Debug, Clone, PartialEq)]
pub enum PageElement {
    Title(String),
    Subheading(String),
    ColumnList(Vec<String>),
    Preview(TablePreview),
    Chart(Figure),
    Diagnostic(Diagnostic),
}

/// In-memory page, drawn by the UI shell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    elements: Vec<PageElement>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.elements.iter().filter_map(|e| match e {
            PageElement::Chart(figure) => Some(figure),
            _ => None,
        })
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.elements.iter().filter_map(|e| match e {
            PageElement::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        })
    }
}

impl PageSink for Page {
    fn title(&mut self, text: &str) {
        self.elements.push(PageElement::Title(text.to_string()));
    }

    fn subheading(&mut self, text: &str) {
        self.elements.push(PageElement::Subheading(text.to_string()));
    }

    fn column_list(&mut self, columns: Vec<String>) {
        self.elements.push(PageElement::ColumnList(columns));
    }

    fn preview(&mut self, preview: TablePreview) {
        self.elements.push(PageElement::Preview(preview));
    }

    fn chart(&mut self, figure: Figure) {
        self.elements.push(PageElement::Chart(figure));
    }

    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.elements.push(PageElement::Diagnostic(diagnostic));
    }
}
