//! PDF text source.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Plain text of a single PDF page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text, lines separated by `\n`. Empty if the page has none.
    pub text: String,
}

impl PdfPage {
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Trait for PDF text sources.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text of every page, in page order.
    fn extract_pages(&self) -> Result<Vec<PdfPage>>;
}

#[cfg(test)]
pub(crate) use extractor::tests::build_pdf;
