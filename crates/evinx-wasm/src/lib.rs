//! WASM bindings for EV-charging invoice extraction.
//!
//! Every function takes the PDF bytes (for example from a browser `File`)
//! and returns plain JS values or workbook bytes. Nothing is kept between
//! calls.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use evinx_core::export::{TableExporter, XLSX_MIME};
use evinx_core::models::config::EvinxConfig;
use evinx_core::{
    ColumnRequest, ColumnSelection, KeywordRequest, LineItemExtractor, Pipeline, XlsxExporter,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// MIME type of the workbooks returned by the export functions.
#[wasm_bindgen]
pub fn xlsx_mime_type() -> String {
    XLSX_MIME.to_string()
}

/// Extract all charging records from a PDF.
///
/// Returns `{ records, pages_scanned, pages_without_text }` with each record
/// keyed by its German column label.
#[wasm_bindgen]
pub fn extract_records(data: &[u8]) -> Result<JsValue, JsValue> {
    InvoiceExtractor::new().extract(data)
}

/// Extract charging records from already-extracted page text.
#[wasm_bindgen]
pub fn extract_records_from_text(text: &str) -> Result<JsValue, JsValue> {
    InvoiceExtractor::new().extract_from_text(text)
}

/// Workbook with every extracted record, or `undefined` when none was found.
#[wasm_bindgen]
pub fn export_xlsx(data: &[u8]) -> Result<Option<Vec<u8>>, JsValue> {
    InvoiceExtractor::new().export_xlsx(data)
}

/// Workbook restricted to the columns listed in `columns` (one per line).
///
/// Returns `undefined` when the invoice holds no records or none of the
/// names is a column.
#[wasm_bindgen]
pub fn export_columns_xlsx(data: &[u8], columns: &str) -> Result<Option<Vec<u8>>, JsValue> {
    InvoiceExtractor::new().export_columns_xlsx(data, columns)
}

/// Lines containing any of the keywords (one per line), case-insensitive.
///
/// Returns `{ matches: [{ Keyword, Line }], missing }`.
#[wasm_bindgen]
pub fn scan_keywords(data: &[u8], keywords: &str) -> Result<JsValue, JsValue> {
    InvoiceExtractor::new().scan_keywords(data, keywords)
}

/// Invoice extractor class for browser use.
#[wasm_bindgen]
pub struct InvoiceExtractor {
    config: EvinxConfig,
}

#[wasm_bindgen]
impl InvoiceExtractor {
    /// Create an extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: EvinxConfig::default(),
        }
    }

    /// Line-item description prefix to look for.
    #[wasm_bindgen]
    pub fn set_description_prefix(&mut self, prefix: &str) {
        self.config.extraction.description_prefix = prefix.to_string();
    }

    /// Read at most `max_pages` pages (0 reads all).
    #[wasm_bindgen]
    pub fn set_max_pages(&mut self, max_pages: usize) {
        self.config.pdf.max_pages = max_pages;
    }

    #[wasm_bindgen]
    pub fn extract(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let result = self.pipeline()?.extract(data).map_err(js_error)?;
        to_js(&result)
    }

    #[wasm_bindgen]
    pub fn extract_from_text(&self, text: &str) -> Result<JsValue, JsValue> {
        let records = self.pipeline()?.parser().extract_from_text(text);
        to_js(&records)
    }

    #[wasm_bindgen]
    pub fn export_xlsx(&self, data: &[u8]) -> Result<Option<Vec<u8>>, JsValue> {
        let result = self.pipeline()?.extract(data).map_err(js_error)?;
        if result.is_empty() {
            return Ok(None);
        }

        XlsxExporter::records(&self.config.export)
            .export(&result.to_table())
            .map(Some)
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn export_columns_xlsx(&self, data: &[u8], columns: &str) -> Result<Option<Vec<u8>>, JsValue> {
        let request = ColumnRequest::from_text(columns).map_err(js_error)?;
        let selection = self
            .pipeline()?
            .select_columns(data, &request)
            .map_err(js_error)?;

        match selection {
            ColumnSelection::Selected { projection, .. } if projection.matched_any() => {
                XlsxExporter::filtered(&self.config.export)
                    .export(&projection.table)
                    .map(Some)
                    .map_err(js_error)
            }
            _ => Ok(None),
        }
    }

    #[wasm_bindgen]
    pub fn scan_keywords(&self, data: &[u8], keywords: &str) -> Result<JsValue, JsValue> {
        let request = KeywordRequest::from_text(keywords).map_err(js_error)?;
        let scan = self
            .pipeline()?
            .scan_keywords(data, &request)
            .map_err(js_error)?;
        to_js(&scan)
    }
}

impl InvoiceExtractor {
    fn pipeline(&self) -> Result<Pipeline, JsValue> {
        Pipeline::new(self.config.clone()).map_err(js_error)
    }
}

impl Default for InvoiceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Plain objects instead of `Map`s, numbers as JS numbers.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = "Home Charging Basic Monthly  01.04.2024 - 30.04.2024\n\
                        1 St 1.234,56 1.234,56\n\
                        Ladepunktnummer: CP-001 Vermerk: Home unit";

    fn to_json(value: JsValue) -> Value {
        serde_wasm_bindgen::from_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[wasm_bindgen_test]
    fn test_extract_records_from_text() {
        let records = to_json(extract_records_from_text(PAGE).unwrap());
        assert_eq!(
            records,
            json!([{
                "Beschreibung": "Home Charging Basic Monthly",
                "Startdatum": "01.04.2024",
                "Enddatum": "30.04.2024",
                "Menge": "1",
                "Preis pro Einheit (EUR)": 1234.56,
                "Betrag in EUR": 1234.56,
                "Ladepunktnummer": "CP-001",
                "Vermerk": "Home unit"
            }])
        );
    }

    #[wasm_bindgen_test]
    fn test_custom_prefix() {
        let mut extractor = InvoiceExtractor::new();
        extractor.set_description_prefix("Home Charging Plus");
        let records = to_json(extractor.extract_from_text(PAGE).unwrap());
        assert_eq!(records, json!([]));
    }

    #[wasm_bindgen_test]
    fn test_missing_document() {
        let err = extract_records(&[]).unwrap_err();
        assert_eq!(err.as_string().unwrap(), "please supply a PDF invoice");
    }

    #[wasm_bindgen_test]
    fn test_missing_columns() {
        let err = export_columns_xlsx(b"%PDF-1.5", " \n ").unwrap_err();
        assert_eq!(err.as_string().unwrap(), "please enter at least one column name");
    }

    #[wasm_bindgen_test]
    fn test_missing_keywords() {
        let err = scan_keywords(b"%PDF-1.5", "").unwrap_err();
        assert_eq!(err.as_string().unwrap(), "please enter at least one keyword");
    }
}
