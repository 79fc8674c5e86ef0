//! Chart render operations

// Bar charts
pub mod bar;

// Statistical plots
pub mod correlation;

// Utilities
pub mod utils;

// Re-exports
pub use bar::{render_categorical_distribution, render_ordinal_score_distribution, show_bar_figure};
pub use correlation::{render_correlation_heatmap, show_heatmap_figure};
