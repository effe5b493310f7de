//! Three-line record scanner for EV-charging invoices.

use tracing::{debug, trace};

use crate::models::record::ChargingRecord;
use crate::pdf::PdfPage;

use super::rules::{AnnotationRule, HeaderRule, LineRule, QuantityPriceRule};
use super::{ExtractionResult, LineItemExtractor};

/// A record found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRecord {
    /// Index of the header line within the page.
    pub line: usize,
    /// The extracted record.
    pub record: ChargingRecord,
}

/// Parser recognising header, quantity/price and annotation line triples.
#[derive(Debug, Clone, Default)]
pub struct ChargingRecordParser {
    header: HeaderRule,
    quantity: QuantityPriceRule,
    annotation: AnnotationRule,
}

impl ChargingRecordParser {
    /// Create a parser for "Home Charging Basic" line items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser whose header lines start with `prefix`.
    pub fn with_prefix(prefix: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            header: HeaderRule::with_prefix(prefix)?,
            ..Self::default()
        })
    }

    /// Build a record from three consecutive trimmed lines, if they form one.
    pub fn parse_triple(&self, lines: [&str; 3]) -> Option<ChargingRecord> {
        let header = self.header.match_line(lines[0])?;
        let price = self.quantity.match_line(lines[1])?;
        let annotation = self.annotation.match_line(lines[2])?;

        Some(ChargingRecord::new(
            header.description,
            header.start_date,
            header.end_date,
            price.unit_price,
            price.amount,
            annotation.charge_point,
            annotation.remark,
        ))
    }

    /// Scan the lines of one page.
    pub fn scan<'p, 't>(&'p self, text: &'t str) -> TripleScanner<'p, 't> {
        TripleScanner::new(self, text)
    }
}

/// Forward-only scanner over the lines of one page.
///
/// The only state is the cursor. A matching triple moves it by three, any
/// mismatch moves it by one. Fewer than three remaining lines end the scan.
pub struct TripleScanner<'p, 't> {
    parser: &'p ChargingRecordParser,
    lines: Vec<&'t str>,
    cursor: usize,
}

impl<'p, 't> TripleScanner<'p, 't> {
    fn new(parser: &'p ChargingRecordParser, text: &'t str) -> Self {
        Self {
            parser,
            lines: text.lines().map(str::trim).collect(),
            cursor: 0,
        }
    }

    /// Current line index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for TripleScanner<'_, '_> {
    type Item = ScannedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor + 2 < self.lines.len() {
            let at = self.cursor;
            let window = [self.lines[at], self.lines[at + 1], self.lines[at + 2]];

            match self.parser.parse_triple(window) {
                Some(record) => {
                    trace!("Record at line {}: {}", at, record.description());
                    self.cursor += 3;
                    return Some(ScannedRecord { line: at, record });
                }
                None => self.cursor += 1,
            }
        }
        None
    }
}

impl LineItemExtractor for ChargingRecordParser {
    fn extract_from_text(&self, text: &str) -> Vec<ChargingRecord> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.scan(text)
            .map(|scanned| {
                // Dates are kept as printed even when they are not real calendar dates
                if scanned.record.period().is_none() {
                    debug!(
                        "Record at line {} has an invalid billing period: {} - {}",
                        scanned.line,
                        scanned.record.start_date(),
                        scanned.record.end_date()
                    );
                }
                scanned.record
            })
            .collect()
    }

    fn extract_pages(&self, pages: &[PdfPage]) -> ExtractionResult {
        let mut result = ExtractionResult::default();

        for page in pages {
            result.pages_scanned += 1;

            if !page.has_text() {
                debug!("Page {} has no extractable text, skipping", page.number);
                result.pages_without_text += 1;
                continue;
            }

            let records = self.extract_from_text(&page.text);
            debug!("Page {}: {} records", page.number, records.len());
            result.records.extend(records);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::ExtractionStatus;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE: &str = "Home Charging Basic Monthly  01.04.2024 - 30.04.2024\n\
                          1 St 12,34 12,34\n\
                          Ladepunktnummer: CP-001 Vermerk: Home unit";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn page(number: u32, text: &str) -> PdfPage {
        PdfPage {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let records = ChargingRecordParser::new().extract_from_text(SAMPLE);

        assert_eq!(
            records,
            vec![ChargingRecord::new(
                "Home Charging Basic Monthly",
                "01.04.2024",
                "30.04.2024",
                dec("12.34"),
                dec("12.34"),
                "CP-001",
                "Home unit",
            )]
        );
    }

    #[test]
    fn test_lines_are_trimmed() {
        let text = "   Home Charging Basic Monthly  01.04.2024 - 30.04.2024  \n\
                    \t1 St 12,34 12,34\n\
                    Ladepunktnummer: CP-001   ";
        let records = ChargingRecordParser::new().extract_from_text(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].charge_point(), "CP-001");
        assert_eq!(records[0].remark(), "");
    }

    #[test]
    fn test_thousands_separator() {
        let text = "Home Charging Basic Yearly  01.01.2024 - 31.12.2024\n\
                    1 St 1.234,56 1.234,56\n\
                    Ladepunktnummer: CP-9";
        let records = ChargingRecordParser::new().extract_from_text(text);
        assert_eq!(records[0].unit_price(), dec("1234.56"));
        assert_eq!(records[0].amount(), dec("1234.56"));
    }

    #[test]
    fn test_quantity_is_always_one() {
        let text = "Home Charging Basic  01.04.2024 - 30.04.2024\n\
                    7 St 2,00 14,00\n\
                    Ladepunktnummer: CP-002";
        let records = ChargingRecordParser::new().extract_from_text(text);
        assert_eq!(records[0].quantity(), "1");
        assert_eq!(records[0].amount(), dec("14.00"));
    }

    #[test]
    fn test_oversized_quantity_still_yields_record() {
        let text = "Home Charging Basic  01.04.2024 - 30.04.2024\n\
                    99999999999999999999 St 12,34 12,34\n\
                    Ladepunktnummer: CP-001";
        let records = ChargingRecordParser::new().extract_from_text(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity(), "1");
    }

    #[test]
    fn test_out_of_range_amount_is_not_a_price_line() {
        let text = "Home Charging Basic  01.04.2024 - 30.04.2024\n\
                    1 St 99.999.999.999.999.999.999.999.999.999,00 1,00\n\
                    Ladepunktnummer: CP-001";
        assert!(ChargingRecordParser::new().extract_from_text(text).is_empty());
    }

    #[test]
    fn test_impossible_dates_are_kept_as_printed() {
        let text = "Home Charging Basic  31.02.2024 - 30.04.2024\n\
                    1 St 1,00 1,00\n\
                    Ladepunktnummer: CP-001";
        let records = ChargingRecordParser::new().extract_from_text(text);
        assert_eq!(records[0].start_date(), "31.02.2024");
        assert!(records[0].period().is_none());
    }

    #[test]
    fn test_resynchronizes_after_partial_record() {
        let text = "Home Charging Basic A  01.03.2024 - 31.03.2024\n\
                    Home Charging Basic B  01.04.2024 - 30.04.2024\n\
                    1 St 9,99 9,99\n\
                    Ladepunktnummer: CP-B";
        let scanned: Vec<ScannedRecord> = ChargingRecordParser::new().scan(text).collect();

        assert_eq!(scanned.len(), 1);
        assert_eq!(scanned[0].line, 1);
        assert_eq!(scanned[0].record.description(), "Home Charging Basic B");
    }

    #[test]
    fn test_consumed_triples_never_overlap() {
        let text = [SAMPLE, SAMPLE, "noise", SAMPLE].join("\n");
        let scanned: Vec<ScannedRecord> = ChargingRecordParser::new().scan(&text).collect();

        let starts: Vec<usize> = scanned.iter().map(|s| s.line).collect();
        assert_eq!(starts, vec![0, 3, 7]);
        for pair in starts.windows(2) {
            assert!(pair[1] >= pair[0] + 3);
        }
    }

    #[test]
    fn test_trailing_lines_are_ignored() {
        let text = format!("{}\nHome Charging Basic  01.05.2024 - 31.05.2024\n1 St 1,00 1,00", SAMPLE);
        let parser = ChargingRecordParser::new();
        let mut scanner = parser.scan(&text);
        assert_eq!(scanner.by_ref().count(), 1);
        assert_eq!(scanner.cursor(), 3);
    }

    #[test]
    fn test_short_pages() {
        let parser = ChargingRecordParser::new();
        assert!(parser.extract_from_text("").is_empty());
        assert!(parser.extract_from_text("Home Charging Basic  01.04.2024 - 30.04.2024\n1 St 1,00 1,00").is_empty());
    }

    #[test]
    fn test_unrelated_text_is_empty() {
        let pages = vec![page(1, "Rechnung Nr. 4711\nKundennummer 123\nSumme 12,34 EUR\nVielen Dank")];
        let result = ChargingRecordParser::new().extract_pages(&pages);

        assert!(result.records.is_empty());
        assert_eq!(result.status(), ExtractionStatus::Empty);
    }

    #[test]
    fn test_pages_are_scanned_in_order() {
        let second = SAMPLE.replace("CP-001", "CP-002");
        let pages = vec![page(1, SAMPLE), page(2, "   \n  "), page(3, &second)];
        let result = ChargingRecordParser::new().extract_pages(&pages);

        assert_eq!(result.pages_scanned, 3);
        assert_eq!(result.pages_without_text, 1);
        let ids: Vec<&str> = result.records.iter().map(|r| r.charge_point()).collect();
        assert_eq!(ids, vec!["CP-001", "CP-002"]);
        assert_eq!(result.status(), ExtractionStatus::Extracted(2));
    }

    #[test]
    fn test_records_do_not_span_pages() {
        let pages = vec![
            page(1, "Home Charging Basic  01.04.2024 - 30.04.2024\n1 St 1,00 1,00"),
            page(2, "Ladepunktnummer: CP-001"),
        ];
        assert!(ChargingRecordParser::new().extract_pages(&pages).records.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = [SAMPLE, "noise", SAMPLE].join("\n");
        let parser = ChargingRecordParser::new();
        assert_eq!(parser.extract_from_text(&text), parser.extract_from_text(&text));
    }
}
