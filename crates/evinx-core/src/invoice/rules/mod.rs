//! Line rules for EV-charging invoice records.
//!
//! A record spans three lines; each line has its own rule:
//! - [`HeaderRule`]: description and billing period
//! - [`QuantityPriceRule`]: quantity, unit price and amount
//! - [`AnnotationRule`]: charge-point id and remark

pub mod amounts;
pub mod annotation;
pub mod dates;
pub mod header;
pub mod patterns;
pub mod quantity;

pub use amounts::parse_german_amount;
pub use annotation::{AnnotationFields, AnnotationRule};
pub use dates::parse_german_date;
pub use header::{HeaderFields, HeaderRule};
pub use quantity::{PriceFields, QuantityPriceRule};

/// Trait for single-line matchers.
pub trait LineRule<'a> {
    /// Fields captured from a matching line.
    type Output;

    /// Match one trimmed line, returning its fields if the line has the expected shape.
    fn match_line(&self, line: &'a str) -> Option<Self::Output>;
}
