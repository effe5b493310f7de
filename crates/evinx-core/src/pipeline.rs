//! One-document extraction pipeline: PDF bytes in, records or tables out.
//!
//! Every call is self-contained. The document and the optional user lists
//! are passed in explicitly and nothing is kept between calls.

use tracing::{debug, info};

use crate::error::{EvinxError, Result};
use crate::invoice::{ChargingRecordParser, ExtractionResult, LineItemExtractor};
use crate::keywords::KeywordScan;
use crate::models::config::EvinxConfig;
use crate::pdf::{PdfExtractor, PdfPage};
use crate::request::{ensure_document, ColumnRequest, KeywordRequest};
use crate::table::Projection;

/// Outcome of a column-filtered extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSelection {
    /// The document contained no records, so nothing was projected.
    Empty,
    /// Records were found and projected onto the requested columns.
    Selected {
        /// Number of extracted records.
        records: usize,
        projection: Projection,
    },
}

/// Extraction pipeline configured once and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: EvinxConfig,
    parser: ChargingRecordParser,
}

impl Pipeline {
    /// Build a pipeline from configuration.
    pub fn new(config: EvinxConfig) -> Result<Self> {
        let parser = ChargingRecordParser::with_prefix(&config.extraction.description_prefix)
            .map_err(|e| EvinxError::Config(format!("invalid description prefix: {}", e)))?;
        Ok(Self { config, parser })
    }

    pub fn config(&self) -> &EvinxConfig {
        &self.config
    }

    pub fn parser(&self) -> &ChargingRecordParser {
        &self.parser
    }

    /// Read the text of every page. The document is released before returning.
    pub fn read_document(&self, data: &[u8]) -> Result<Vec<PdfPage>> {
        let data = ensure_document(data)?;
        let pages = PdfExtractor::read_pages(data, &self.config.pdf)?;
        debug!("Read {} pages", pages.len());
        Ok(pages)
    }

    /// Extract records from already-read pages.
    pub fn extract_pages(&self, pages: &[PdfPage]) -> ExtractionResult {
        let result = self.parser.extract_pages(pages);
        info!(
            "Extracted {} records from {} pages ({} without text)",
            result.records.len(),
            result.pages_scanned,
            result.pages_without_text
        );
        result
    }

    /// Extract all records from a PDF document.
    pub fn extract(&self, data: &[u8]) -> Result<ExtractionResult> {
        let pages = self.read_document(data)?;
        Ok(self.extract_pages(&pages))
    }

    /// Extract records and keep only the requested columns.
    pub fn select_columns(&self, data: &[u8], request: &ColumnRequest) -> Result<ColumnSelection> {
        let result = self.extract(data)?;
        if result.is_empty() {
            return Ok(ColumnSelection::Empty);
        }

        let projection = result.to_table().project(request.columns());
        if !projection.missing.is_empty() {
            info!("Columns not found: {}", projection.missing.join(", "));
        }

        Ok(ColumnSelection::Selected {
            records: result.records.len(),
            projection,
        })
    }

    /// Scan the raw page text for keywords.
    pub fn scan_keywords(&self, data: &[u8], request: &KeywordRequest) -> Result<KeywordScan> {
        let pages = self.read_document(data)?;
        Ok(KeywordScan::scan_pages(&pages, request.keywords()))
    }
}
