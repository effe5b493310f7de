//! Keyword line scan over raw page text.
//!
//! Independent of the record extractor: every text line is tested against
//! every keyword with a case-insensitive substring search.

use serde::Serialize;
use tracing::debug;

use crate::pdf::PdfPage;
use crate::table::{Cell, Table};

pub const COL_KEYWORD: &str = "Keyword";
pub const COL_LINE: &str = "Line";

/// One line containing one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Line")]
    pub line: String,
}

/// Matches of a keyword scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordScan {
    /// Matches in line order, then keyword order. A line matching several
    /// keywords appears once per keyword.
    pub matches: Vec<KeywordMatch>,
    /// Keywords that matched no line.
    pub missing: Vec<String>,
}

impl KeywordScan {
    /// Scan lines of text for keywords.
    pub fn scan_lines<'a, I>(lines: I, keywords: &[String]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut hit = vec![false; keywords.len()];
        let mut matches = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let haystack = line.to_lowercase();

            for (idx, needle) in needles.iter().enumerate() {
                if haystack.contains(needle.as_str()) {
                    hit[idx] = true;
                    matches.push(KeywordMatch {
                        keyword: keywords[idx].clone(),
                        line: line.to_string(),
                    });
                }
            }
        }

        let missing = keywords
            .iter()
            .zip(&hit)
            .filter(|(_, found)| !**found)
            .map(|(keyword, _)| keyword.clone())
            .collect();

        Self { matches, missing }
    }

    /// Scan every line of every page, in page order.
    pub fn scan_pages(pages: &[PdfPage], keywords: &[String]) -> Self {
        let scan = Self::scan_lines(pages.iter().flat_map(|page| page.text.lines()), keywords);
        debug!(
            "Keyword scan: {} matches, {} keywords without match",
            scan.matches.len(),
            scan.missing.len()
        );
        scan
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Two-column `Keyword` / `Line` table.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(vec![COL_KEYWORD.to_string(), COL_LINE.to_string()]);
        for m in &self.matches {
            table.push_row(vec![Cell::Text(m.keyword.clone()), Cell::Text(m.line.clone())]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let scan = KeywordScan::scan_lines(
            ["Ladepunktnummer: CP-001", "Summe netto 12,34"],
            &keywords(&["LADEPUNKT"]),
        );
        assert_eq!(
            scan.matches,
            vec![KeywordMatch {
                keyword: "LADEPUNKT".into(),
                line: "Ladepunktnummer: CP-001".into(),
            }]
        );
        assert!(scan.missing.is_empty());
    }

    #[test]
    fn test_line_order_then_keyword_order() {
        let scan = KeywordScan::scan_lines(
            ["Betrag 10,00 EUR", "Home Charging Basic", "Betrag 5,00 EUR"],
            &keywords(&["eur", "betrag"]),
        );
        let pairs: Vec<(&str, &str)> = scan
            .matches
            .iter()
            .map(|m| (m.keyword.as_str(), m.line.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("eur", "Betrag 10,00 EUR"),
                ("betrag", "Betrag 10,00 EUR"),
                ("eur", "Betrag 5,00 EUR"),
                ("betrag", "Betrag 5,00 EUR"),
            ]
        );
    }

    #[test]
    fn test_duplicate_keywords_are_kept() {
        let scan = KeywordScan::scan_lines(["Vermerk: Garage"], &keywords(&["vermerk", "Vermerk"]));
        assert_eq!(scan.matches.len(), 2);
    }

    #[test]
    fn test_missing_keywords() {
        let scan = KeywordScan::scan_lines(["Rechnung"], &keywords(&["Rechnung", "Gutschrift"]));
        assert_eq!(scan.missing, keywords(&["Gutschrift"]));
    }

    #[test]
    fn test_scan_pages_and_table() {
        let pages = vec![
            PdfPage { number: 1, text: "Kunde\nLadepunktnummer: A".into() },
            PdfPage { number: 2, text: String::new() },
            PdfPage { number: 3, text: "Ladepunktnummer: B".into() },
        ];
        let table = KeywordScan::scan_pages(&pages, &keywords(&["ladepunkt"])).to_table();

        assert_eq!(table.columns(), &["Keyword".to_string(), "Line".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1][1], Cell::Text("Ladepunktnummer: B".into()));
    }
}
