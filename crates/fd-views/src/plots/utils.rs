//! Utilities for plot views

pub mod colors;
pub mod stats;

// Re-export commonly used items
pub use colors::{coolwarm_color, correlation_color, palette_color};
pub use stats::{correlation_matrix, pearson, sort_by_count, sort_by_scale, value_counts, ValueCount};
