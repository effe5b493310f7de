//! Single-sheet xlsx workbooks via rust_xlsxwriter.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use super::TableExporter;
use crate::error::ExportError;
use crate::models::config::ExportConfig;
use crate::table::{Cell, Table};

/// Writes a table as one worksheet: a header row, then one row per table row.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    sheet_name: String,
    number_format: String,
}

impl XlsxExporter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            number_format: "0.00".to_string(),
        }
    }

    /// Excel number format for numeric cells.
    pub fn with_number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = format.into();
        self
    }

    /// Exporter for the full record table.
    pub fn records(config: &ExportConfig) -> Self {
        Self::new(&config.sheet_name).with_number_format(&config.number_format)
    }

    /// Exporter for a column-filtered table.
    pub fn filtered(config: &ExportConfig) -> Self {
        Self::new(&config.filtered_sheet_name).with_number_format(&config.number_format)
    }

    /// Exporter for keyword matches.
    pub fn keywords(config: &ExportConfig) -> Self {
        Self::new(&config.keyword_sheet_name).with_number_format(&config.number_format)
    }
}

impl TableExporter for XlsxExporter {
    fn export(&self, table: &Table) -> Result<Vec<u8>, ExportError> {
        if table.columns().is_empty() {
            return Err(ExportError::NoColumns);
        }

        let header_format = Format::new().set_bold();
        let number_format = Format::new().set_num_format(&self.number_format);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, name) in table.columns().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
        }

        for (row_idx, row) in table.rows().iter().enumerate() {
            let row_num = row_idx as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                let col_num = col as u16;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col_num, text)?;
                    }
                    Cell::Number(value) => {
                        let number = value.to_f64().ok_or_else(|| ExportError::Number {
                            column: table.columns()[col].clone(),
                            value: value.to_string(),
                        })?;
                        worksheet.write_number_with_format(row_num, col_num, number, &number_format)?;
                    }
                }
            }
        }

        worksheet.autofit();

        let data = workbook.save_to_buffer()?;
        debug!(
            "Wrote sheet {:?}: {} rows, {} columns, {} bytes",
            self.sheet_name,
            table.len(),
            table.columns().len(),
            data.len()
        );
        Ok(data)
    }
}
