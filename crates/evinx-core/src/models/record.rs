//! Invoice line record extracted from EV-charging invoices.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::rules::dates::parse_german_date;
use crate::table::Cell;

pub const COL_DESCRIPTION: &str = "Beschreibung";
pub const COL_START_DATE: &str = "Startdatum";
pub const COL_END_DATE: &str = "Enddatum";
pub const COL_QUANTITY: &str = "Menge";
pub const COL_UNIT_PRICE: &str = "Preis pro Einheit (EUR)";
pub const COL_AMOUNT: &str = "Betrag in EUR";
pub const COL_CHARGE_POINT: &str = "Ladepunktnummer";
pub const COL_REMARK: &str = "Vermerk";

/// Column names of a record, in output order.
pub const RECORD_COLUMNS: [&str; 8] = [
    COL_DESCRIPTION,
    COL_START_DATE,
    COL_END_DATE,
    COL_QUANTITY,
    COL_UNIT_PRICE,
    COL_AMOUNT,
    COL_CHARGE_POINT,
    COL_REMARK,
];

/// Quantity written for every record. The quantity printed on the invoice is ignored.
pub const FIXED_QUANTITY: &str = "1";

/// One billed charging line item.
///
/// Built once from three consecutive invoice lines and never modified
/// afterwards, so fields are only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargingRecord {
    #[serde(rename = "Beschreibung")]
    description: String,

    #[serde(rename = "Startdatum")]
    start_date: String,

    #[serde(rename = "Enddatum")]
    end_date: String,

    #[serde(rename = "Menge")]
    quantity: String,

    #[serde(rename = "Preis pro Einheit (EUR)", with = "rust_decimal::serde::float")]
    unit_price: Decimal,

    #[serde(rename = "Betrag in EUR", with = "rust_decimal::serde::float")]
    amount: Decimal,

    #[serde(rename = "Ladepunktnummer")]
    charge_point: String,

    #[serde(rename = "Vermerk")]
    remark: String,
}

impl ChargingRecord {
    /// Create a record. `Menge` is always [`FIXED_QUANTITY`].
    pub fn new(
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        unit_price: Decimal,
        amount: Decimal,
        charge_point: impl Into<String>,
        remark: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            quantity: FIXED_QUANTITY.to_string(),
            unit_price,
            amount,
            charge_point: charge_point.into(),
            remark: remark.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Billing period start as printed (`DD.MM.YYYY`).
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Billing period end as printed (`DD.MM.YYYY`).
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn charge_point(&self) -> &str {
        &self.charge_point
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    /// Billing period as calendar dates, if both are valid dates.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            parse_german_date(&self.start_date)?,
            parse_german_date(&self.end_date)?,
        ))
    }

    /// Value of a single column, `None` for names outside [`RECORD_COLUMNS`].
    pub fn cell(&self, column: &str) -> Option<Cell> {
        let cell = match column {
            COL_DESCRIPTION => Cell::Text(self.description.clone()),
            COL_START_DATE => Cell::Text(self.start_date.clone()),
            COL_END_DATE => Cell::Text(self.end_date.clone()),
            COL_QUANTITY => Cell::Text(self.quantity.clone()),
            COL_UNIT_PRICE => Cell::Number(self.unit_price),
            COL_AMOUNT => Cell::Number(self.amount),
            COL_CHARGE_POINT => Cell::Text(self.charge_point.clone()),
            COL_REMARK => Cell::Text(self.remark.clone()),
            _ => return None,
        };
        Some(cell)
    }

    /// All cells in [`RECORD_COLUMNS`] order.
    pub fn cells(&self) -> Vec<Cell> {
        RECORD_COLUMNS
            .iter()
            .filter_map(|column| self.cell(column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn sample() -> ChargingRecord {
        ChargingRecord::new(
            "Home Charging Basic Monthly",
            "01.04.2024",
            "30.04.2024",
            Decimal::from_str("12.34").unwrap(),
            Decimal::from_str("12.34").unwrap(),
            "CP-001",
            "Home unit",
        )
    }

    #[test]
    fn test_quantity_is_fixed() {
        assert_eq!(sample().quantity(), "1");
    }

    #[test]
    fn test_cells_follow_column_order() {
        let cells = sample().cells();
        assert_eq!(cells.len(), RECORD_COLUMNS.len());
        assert_eq!(cells[0], Cell::Text("Home Charging Basic Monthly".to_string()));
        assert_eq!(cells[4], Cell::Number(Decimal::from_str("12.34").unwrap()));
        assert_eq!(cells[7], Cell::Text("Home unit".to_string()));
    }

    #[test]
    fn test_unknown_column() {
        assert!(sample().cell("Nonexistent").is_none());
    }

    #[test]
    fn test_serializes_german_labels_and_numbers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Beschreibung"], "Home Charging Basic Monthly");
        assert_eq!(json["Menge"], "1");
        assert_eq!(json["Betrag in EUR"], serde_json::json!(12.34));
        assert_eq!(json["Ladepunktnummer"], "CP-001");
    }

    #[test]
    fn test_period() {
        let (start, end) = sample().period().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());

        let odd = ChargingRecord::new("x", "31.02.2024", "01.03.2024", Decimal::ONE, Decimal::ONE, "", "");
        assert!(odd.period().is_none());
    }
}
