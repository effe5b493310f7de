//! Tabular output encoders.

pub mod xlsx;

pub use xlsx::XlsxExporter;

use crate::error::ExportError;
use crate::table::Table;

/// MIME type of the xlsx artifact.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Trait for encoders turning a table into a downloadable artifact.
pub trait TableExporter {
    /// Encode the table into an in-memory file.
    fn export(&self, table: &Table) -> Result<Vec<u8>, ExportError>;
}
