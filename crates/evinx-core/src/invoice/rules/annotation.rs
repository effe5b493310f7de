//! Annotation line: charge-point id and optional remark.

use super::patterns::{CHARGE_POINT_LABEL, REMARK_LABEL};
use super::LineRule;

/// Fields captured from an annotation line. Both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationFields<'a> {
    pub charge_point: &'a str,
    pub remark: &'a str,
}

/// Matches any line containing `Ladepunktnummer:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationRule;

impl AnnotationRule {
    pub fn new() -> Self {
        Self
    }
}

impl<'a> LineRule<'a> for AnnotationRule {
    type Output = AnnotationFields<'a>;

    fn match_line(&self, line: &'a str) -> Option<Self::Output> {
        if !line.contains(CHARGE_POINT_LABEL) {
            return None;
        }
        Some(AnnotationFields {
            charge_point: token_after(line, CHARGE_POINT_LABEL).unwrap_or(""),
            remark: rest_after(line, REMARK_LABEL).unwrap_or(""),
        })
    }
}

/// First non-whitespace run following any occurrence of `label`.
fn token_after<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.match_indices(label).find_map(|(pos, _)| {
        let rest = line[pos + label.len()..].trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    })
}

/// Everything after the first occurrence of `label`, trimmed.
fn rest_after<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.find(label)
        .map(|pos| line[pos + label.len()..].trim())
}
