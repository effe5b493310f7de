//! Header line: charging plan description and billing period.

use regex::Regex;

use super::patterns::{header_pattern, DEFAULT_HEADER};
use super::LineRule;

/// Fields captured from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    pub description: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
}

/// Matches `"<prefix>...  DD.MM.YYYY - DD.MM.YYYY"`.
#[derive(Debug, Clone)]
pub struct HeaderRule {
    pattern: Regex,
}

impl HeaderRule {
    /// Rule for the default "Home Charging Basic" prefix.
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_HEADER.clone(),
        }
    }

    /// Rule for a custom description prefix.
    pub fn with_prefix(prefix: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: header_pattern(prefix)?,
        })
    }
}

impl Default for HeaderRule {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LineRule<'a> for HeaderRule {
    type Output = HeaderFields<'a>;

    fn match_line(&self, line: &'a str) -> Option<Self::Output> {
        let caps = self.pattern.captures(line)?;
        Some(HeaderFields {
            description: caps.get(1)?.as_str(),
            start_date: caps.get(2)?.as_str(),
            end_date: caps.get(3)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_line() {
        let rule = HeaderRule::new();
        let fields = rule
            .match_line("Home Charging Basic Monthly  01.04.2024 - 30.04.2024")
            .unwrap();
        assert_eq!(
            fields,
            HeaderFields {
                description: "Home Charging Basic Monthly",
                start_date: "01.04.2024",
                end_date: "30.04.2024",
            }
        );
    }

    #[test]
    fn test_description_stops_before_date_range() {
        let rule = HeaderRule::new();
        let fields = rule
            .match_line("Home Charging Basic 11 kW Wallbox 01.05.2024 - 31.05.2024")
            .unwrap();
        assert_eq!(fields.description, "Home Charging Basic 11 kW Wallbox");
    }

    #[test]
    fn test_prefix_is_required() {
        let rule = HeaderRule::new();
        assert!(rule.match_line("Public Charging  01.04.2024 - 30.04.2024").is_none());
        assert!(rule.match_line("Tarif Home Charging Basic  01.04.2024 - 30.04.2024").is_none());
        assert!(rule.match_line("Home Charging Basic Monthly").is_none());
        assert!(rule.match_line("Home Charging Basic  01.04.2024 - 30.04.2024 netto").is_none());
    }

    #[test]
    fn test_custom_prefix() {
        let rule = HeaderRule::with_prefix("Home Charging Plus").unwrap();
        assert!(rule.match_line("Home Charging Plus  01.04.2024 - 30.04.2024").is_some());
        assert!(rule.match_line("Home Charging Basic  01.04.2024 - 30.04.2024").is_none());
    }
}
