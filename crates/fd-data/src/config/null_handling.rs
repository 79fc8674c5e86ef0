//! Which cell texts count as missing values

use serde::{Deserialize, Serialize};

/// Markers spreadsheet readers treat as missing by default
pub const SPREADSHEET_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// Null marker configuration used during schema detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullConfig {
    pub markers: Vec<String>,

    /// Compare after stripping surrounding whitespace
    pub trim: bool,

    pub ignore_case: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self::spreadsheet_defaults()
    }
}

impl NullConfig {
    pub fn spreadsheet_defaults() -> Self {
        Self {
            markers: SPREADSHEET_NULL_MARKERS.iter().map(|m| m.to_string()).collect(),
            trim: true,
            ignore_case: false,
        }
    }

    pub fn is_null(&self, cell: &str) -> bool {
        let cell = if self.trim { cell.trim() } else { cell };

        if self.ignore_case {
            self.markers.iter().any(|m| m.eq_ignore_ascii_case(cell))
        } else {
            self.markers.iter().any(|m| m == cell)
        }
    }
}
