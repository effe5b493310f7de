//! Regex patterns for EV-charging invoice lines.

use lazy_static::lazy_static;
use regex::Regex;

/// Header prefix used when none is configured.
pub const DEFAULT_DESCRIPTION_PREFIX: &str = "Home Charging Basic";

/// Label preceding the charge-point identifier.
pub const CHARGE_POINT_LABEL: &str = "Ladepunktnummer:";

/// Label preceding the free-text remark.
pub const REMARK_LABEL: &str = "Vermerk:";

/// German amount: `.` groups thousands, `,` separates the fraction.
///
/// At most 24 integer and 4 fraction digits, which always fit a `Decimal`.
const GERMAN_AMOUNT: &str = r"(?:[0-9]{1,3}(?:\.[0-9]{3}){1,7}|[0-9]{1,24})(?:,[0-9]{1,4})?";

/// Date as printed on the invoice (`DD.MM.YYYY`).
const GERMAN_DATE: &str = r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}";

lazy_static! {
    // "<int> St <price> <amount>"
    pub static ref QUANTITY_PRICE: Regex = Regex::new(&format!(
        r"^([0-9]+) St ({amount}) ({amount})$",
        amount = GERMAN_AMOUNT
    ))
    .unwrap();

    pub static ref DEFAULT_HEADER: Regex = header_pattern(DEFAULT_DESCRIPTION_PREFIX).unwrap();
}

/// Build the header line pattern for a description prefix.
///
/// Captures the description (lazily, up to the whitespace before the date
/// range), the start date and the end date.
pub fn header_pattern(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"^({prefix}.*?)\s+({date}) - ({date})$",
        prefix = regex::escape(prefix),
        date = GERMAN_DATE
    ))
}
