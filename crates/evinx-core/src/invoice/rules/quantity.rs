//! Quantity/price line: `<int> St <unit price> <amount>`.

use rust_decimal::Decimal;
use tracing::warn;

use super::amounts::parse_german_amount;
use super::patterns::QUANTITY_PRICE;
use super::LineRule;

/// Values captured from a quantity/price line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFields<'a> {
    /// Quantity as printed. Records ignore it.
    pub quantity: &'a str,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// Matches the quantity/price line of a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantityPriceRule;

impl QuantityPriceRule {
    pub fn new() -> Self {
        Self
    }
}

impl<'a> LineRule<'a> for QuantityPriceRule {
    type Output = PriceFields<'a>;

    fn match_line(&self, line: &'a str) -> Option<Self::Output> {
        let caps = QUANTITY_PRICE.captures(line)?;
        let (unit_price, amount) = (caps.get(2)?.as_str(), caps.get(3)?.as_str());

        let (Some(unit_price), Some(amount)) =
            (parse_german_amount(unit_price), parse_german_amount(amount))
        else {
            warn!("Price line matched but its amounts do not parse: {:?}", line);
            return None;
        };

        Some(PriceFields {
            quantity: caps.get(1)?.as_str(),
            unit_price,
            amount,
        })
    }
}
