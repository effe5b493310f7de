//! Invoice line-item extraction module.

mod parser;
pub mod rules;

pub use parser::{ChargingRecordParser, ScannedRecord, TripleScanner};

use serde::Serialize;

use crate::models::record::{ChargingRecord, RECORD_COLUMNS};
use crate::pdf::PdfPage;
use crate::table::Table;

/// Outcome of one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    /// At least one record was found.
    Extracted(usize),
    /// No record matched. Informational, not an error.
    Empty,
}

/// Result of extracting records from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// Records in discovery order.
    pub records: Vec<ChargingRecord>,
    /// Number of pages looked at.
    pub pages_scanned: usize,
    /// Pages skipped because they had no text.
    pub pages_without_text: usize,
}

impl ExtractionResult {
    pub fn status(&self) -> ExtractionStatus {
        match self.records.len() {
            0 => ExtractionStatus::Empty,
            n => ExtractionStatus::Extracted(n),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records as a table with the full column set.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(RECORD_COLUMNS.iter().map(|c| c.to_string()).collect());
        for record in &self.records {
            table.push_row(record.cells());
        }
        table
    }
}

/// Trait for line-item extractors.
pub trait LineItemExtractor {
    /// Extract records from the text of a single page.
    fn extract_from_text(&self, text: &str) -> Vec<ChargingRecord>;

    /// Extract records from all pages, in page order.
    fn extract_pages(&self, pages: &[PdfPage]) -> ExtractionResult;
}
