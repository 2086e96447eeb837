//! Fixed spreadsheet layout conventions
//!
//! The positional rules used by the formula step and the column-name
//! heuristics used by the price comparison live here, so they can be
//! adjusted from a YAML file without touching the algorithms.

use crate::error::{SheetError, SheetResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "output_with_formulas.csv";

/// Cell texts read as missing values, matching common spreadsheet exports.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Layout of the derived N/O formula columns and column lookup heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Minimum export width at which the formulas overwrite existing columns.
    pub column_threshold: usize,
    /// Zero-based positions overwritten when the table is wide enough.
    pub target_positions: [usize; 2],
    /// Column letters referenced by the two formulas.
    pub reference_letters: [String; 2],
    /// Names of the trailing columns used when the table is too narrow.
    pub appended_names: [String; 2],
    /// Spreadsheet row of the first data row (header sits on row 1).
    pub header_offset: usize,
    /// Text appended after the cell reference.
    pub formula_suffix: String,
    /// Case-insensitive substring identifying a price column.
    pub price_needle: String,
    /// Exact column name preferred as the description of a price change.
    pub preferred_description: String,
    pub export_file_name: String,
    /// Data cells with exactly this text load as `""`.
    pub missing_markers: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            column_threshold: 15,
            target_positions: [13, 14],
            reference_letters: ["L".to_string(), "M".to_string()],
            appended_names: ["N".to_string(), "O".to_string()],
            header_offset: 2,
            formula_suffix: ".url".to_string(),
            price_needle: "price".to_string(),
            preferred_description: "Strain Name".to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl Layout {
    /// Parse a layout from YAML. Missing keys keep their defaults.
    pub fn from_yaml_str(content: &str) -> SheetResult<Self> {
        let layout: Layout = serde_yaml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: &Path) -> SheetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> SheetResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> SheetResult<()> {
        let [first, second] = self.target_positions;
        if first == second {
            return Err(SheetError::Layout(format!(
                "target positions must differ, both are {}",
                first
            )));
        }
        if first >= self.column_threshold || second >= self.column_threshold {
            return Err(SheetError::Layout(format!(
                "target positions {:?} must be below the column threshold {}",
                self.target_positions, self.column_threshold
            )));
        }
        if self.reference_letters.iter().any(|l| l.is_empty()) {
            return Err(SheetError::Layout(
                "reference letters must not be empty".to_string(),
            ));
        }
        if self.appended_names[0] == self.appended_names[1] {
            return Err(SheetError::Layout(format!(
                "appended column names must differ, both are '{}'",
                self.appended_names[0]
            )));
        }
        if self.price_needle.is_empty() {
            return Err(SheetError::Layout("price needle must not be empty".to_string()));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(SheetError::Layout(
                "export file name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_constants() {
        let layout = Layout::default();
        assert_eq!(layout.column_threshold, 15);
        assert_eq!(layout.target_positions, [13, 14]);
        assert_eq!(layout.reference_letters, ["L", "M"]);
        assert_eq!(layout.appended_names, ["N", "O"]);
        assert_eq!(layout.export_file_name, "output_with_formulas.csv");
        assert!(layout.missing_markers.iter().any(|m| m == "N/A"));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_missing_markers_can_be_disabled() {
        let layout = Layout::from_yaml_str("missing_markers: []\n").unwrap();
        assert!(layout.missing_markers.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let layout = Layout::from_yaml_str("reference_letters: [P, Q]\n").unwrap();
        assert_eq!(layout.reference_letters, ["P", "Q"]);
        assert_eq!(layout.target_positions, [13, 14]);
        assert_eq!(layout.price_needle, "price");
    }

    #[test]
    fn test_target_outside_threshold_rejected() {
        let result = Layout::from_yaml_str("column_threshold: 10\n");
        assert!(matches!(result, Err(SheetError::Layout(_))));
    }

    #[test]
    fn test_duplicate_targets_rejected() {
        let result = Layout::from_yaml_str("target_positions: [3, 3]\n");
        assert!(matches!(result, Err(SheetError::Layout(_))));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let result = Layout::from_yaml_str("target_positions: [1, \n");
        assert!(matches!(result, Err(SheetError::Yaml(_))));
    }

    #[test]
    fn test_yaml_roundtrip_of_default() {
        let yaml = Layout::default().to_yaml_string().unwrap();
        assert!(yaml.contains("column_threshold: 15"));
        assert_eq!(Layout::from_yaml_str(&yaml).unwrap(), Layout::default());
    }
}
