//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::invoice::rules::patterns::DEFAULT_DESCRIPTION_PREFIX;

/// Main configuration for the evinx pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvinxConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Record extraction configuration.
    pub extraction: ExtractionConfig,

    /// Spreadsheet export configuration.
    pub export: ExportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,

    /// Try the empty user password on encrypted documents.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            decrypt_empty_password: true,
        }
    }
}

/// Record extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Literal text a header line must start with.
    pub description_prefix: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            description_prefix: DEFAULT_DESCRIPTION_PREFIX.to_string(),
        }
    }
}

/// Spreadsheet export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Sheet name for the full record table.
    pub sheet_name: String,

    /// Sheet name for the column-filtered table.
    pub filtered_sheet_name: String,

    /// Sheet name for keyword matches.
    pub keyword_sheet_name: String,

    /// Default file name for the full record table.
    pub default_output: String,

    /// Default file name for the column-filtered table.
    pub filtered_output: String,

    /// Default file name for keyword matches.
    pub keyword_output: String,

    /// Excel number format applied to numeric cells.
    pub number_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "InvoiceData".to_string(),
            filtered_sheet_name: "SelectedData".to_string(),
            keyword_sheet_name: "KeywordMatches".to_string(),
            default_output: "invoice_data.xlsx".to_string(),
            filtered_output: "filtered_invoice_data.xlsx".to_string(),
            keyword_output: "keyword_matches.xlsx".to_string(),
            number_format: "0.00".to_string(),
        }
    }
}

impl EvinxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
