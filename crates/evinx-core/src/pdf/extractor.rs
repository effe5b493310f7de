//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfPage, PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor.
///
/// Owns the parsed document; dropping the extractor releases it.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    max_pages: usize,
    decrypt_empty_password: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            max_pages: 0,
            decrypt_empty_password: true,
        }
    }

    /// Create an extractor with the given PDF settings.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            decrypt_empty_password: config.decrypt_empty_password,
            ..Self::new()
        }
    }

    /// Load `data`, read every page and release the document.
    pub fn read_pages(data: &[u8], config: &PdfConfig) -> Result<Vec<PdfPage>> {
        let mut extractor = Self::from_config(config);
        extractor.load(data)?;
        extractor.extract_pages()
    }

    /// Per-page text through lopdf, used when pdf-extract rejects the document.
    fn extract_pages_lopdf(&self, doc: &Document) -> Vec<String> {
        doc.get_pages()
            .keys()
            .map(|&page_num| match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    debug!("No text on page {}: {}", page_num, e);
                    String::new()
                }
            })
            .collect()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        self.document = Some(doc);
        debug!("Loaded PDF with {} pages", self.page_count());
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_pages(&self) -> Result<Vec<PdfPage>> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))?;

        let texts = match pdf_extract::extract_text_from_mem_by_pages(&self.raw_data) {
            Ok(texts) => texts,
            Err(e) => {
                warn!("pdf-extract failed ({}), falling back to lopdf text extraction", e);
                self.extract_pages_lopdf(doc)
            }
        };

        let mut pages: Vec<PdfPage> = texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| PdfPage {
                number: idx as u32 + 1,
                text,
            })
            .collect();

        if self.max_pages > 0 && pages.len() > self.max_pages {
            debug!("Reading only the first {} of {} pages", self.max_pages, pages.len());
            pages.truncate(self.max_pages);
        }

        let with_text = pages.iter().filter(|p| p.has_text()).count();
        debug!("Extracted text from {}/{} pages", with_text, pages.len());

        if pages.is_empty() {
            return Err(PdfError::TextExtraction("no pages returned".to_string()));
        }

        Ok(pages)
    }
}
