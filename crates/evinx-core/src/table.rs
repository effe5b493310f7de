//! Row collection shared by the extractor, the keyword scan and the exporters.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// A single table value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    #[serde(with = "rust_decimal::serde::float")]
    Number(Decimal),
}

impl Cell {
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    /// Numbers print with two decimals, text as is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{:.2}", n),
        }
    }
}

/// Ordered columns and rows of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Rows must have one cell per column.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Keep only the requested columns, in requested order.
    ///
    /// Names that are not columns of this table are collected in
    /// [`Projection::missing`] instead of failing.
    pub fn project(&self, requested: &[String]) -> Projection {
        let mut indices = Vec::new();
        let mut columns = Vec::new();
        let mut missing = Vec::new();

        for name in requested {
            match self.column_index(name) {
                Some(idx) => {
                    indices.push(idx);
                    columns.push(name.clone());
                }
                None => missing.push(name.clone()),
            }
        }

        let mut table = Table::new(columns);
        if !indices.is_empty() {
            for row in &self.rows {
                table.push_row(indices.iter().map(|&i| row[i].clone()).collect());
            }
        }

        Projection { table, missing }
    }

    /// Rows as JSON objects keyed by column name.
    pub fn to_json_rows(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| {
                        let value = serde_json::to_value(cell).unwrap_or(serde_json::Value::Null);
                        (column.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Result of a column projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Table restricted to the matched columns.
    pub table: Table,
    /// Requested names that are not columns.
    pub missing: Vec<String>,
}

impl Projection {
    /// Whether at least one requested column exists.
    pub fn matched_any(&self) -> bool {
        !self.table.columns().is_empty()
    }
}
