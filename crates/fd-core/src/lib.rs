//! Core types for the AI feedback dashboard
//! 
//! This crate provides the dataset descriptors, diagnostics and settings
//! shared by the data, view and UI crates.

pub mod dataset;
pub mod diagnostics;
pub mod state;

// Re-export commonly used types
pub use dataset::{
    CategoricalChart, DatasetDescriptor, DatasetId, OrdinalChart, ResourceRef,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLog, Severity};
pub use state::{AppSettings, DashboardConfig, DEFAULT_PREVIEW_ROWS};
