//! Core library for EV-charging invoice extraction.
//!
//! This crate provides:
//! - PDF text extraction, page by page
//! - Three-line line-item record extraction ("Home Charging Basic" plans)
//! - Column projection and keyword line scans
//! - Single-sheet xlsx export

pub mod error;
pub mod export;
pub mod invoice;
pub mod keywords;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod request;
pub mod table;

pub use error::{EvinxError, ExportError, InputError, PdfError, Result};
pub use export::{TableExporter, XlsxExporter};
pub use invoice::{ChargingRecordParser, ExtractionResult, ExtractionStatus, LineItemExtractor};
pub use keywords::{KeywordMatch, KeywordScan};
pub use models::config::EvinxConfig;
pub use models::record::{ChargingRecord, RECORD_COLUMNS};
pub use pdf::{PdfExtractor, PdfPage, PdfProcessor};
pub use pipeline::{ColumnSelection, Pipeline};
pub use request::{ColumnRequest, KeywordRequest};
pub use table::{Cell, Projection, Table};
