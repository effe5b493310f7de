//! Error types for the evinx-core library.

use thiserror::Error;

/// Main error type for the evinx library.
#[derive(Error, Debug)]
pub enum EvinxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// A required input was not supplied. Shown to the user as is.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Missing inputs, rejected before any extraction is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("please supply a PDF invoice")]
    MissingDocument,

    #[error("please enter at least one column name")]
    MissingColumns,

    #[error("please enter at least one keyword")]
    MissingKeywords,
}

/// Errors related to writing tabular output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The workbook could not be encoded.
    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// A table without columns cannot be written.
    #[error("table has no columns")]
    NoColumns,

    /// A value did not fit the target cell type.
    #[error("cannot write {value} as a number in column {column}")]
    Number { column: String, value: String },
}

/// Result type for the evinx library.
pub type Result<T> = std::result::Result<T, EvinxError>;
