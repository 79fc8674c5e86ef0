//! User interface components for the feedback dashboard
//!
//! The sidebar selects a dataset; the central panel draws the composed page.

pub mod navigation_panel;
pub mod shell;
pub mod theme;
pub mod widget_utils;

pub use navigation_panel::{NavigationPanel, NavigationPanelConfig};
pub use shell::{central_panel, diagnostic_banner, show_page, sidebar, ShellConfig, SUBHEADING_MARKER};
pub use theme::{apply_theme, Theme};
pub use widget_utils::WidgetId;
