//! Per-call inputs: the uploaded document and optional user-entered lists.

use crate::error::InputError;

/// Split user text "one entry per line": entries are trimmed, blank lines dropped.
pub fn split_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .flat_map(|entry| split_entries(entry.as_ref()))
        .collect()
}

/// Reject an empty document before any extraction is attempted.
pub fn ensure_document(data: &[u8]) -> Result<&[u8], InputError> {
    if data.is_empty() {
        return Err(InputError::MissingDocument);
    }
    Ok(data)
}

/// Column names requested for a filtered export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRequest {
    columns: Vec<String>,
}

impl ColumnRequest {
    /// Build from individual names. Fails if no non-blank name remains.
    pub fn new<I, S>(columns: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = clean_entries(columns);
        if columns.is_empty() {
            return Err(InputError::MissingColumns);
        }
        Ok(Self { columns })
    }

    /// Build from text with one column name per line.
    pub fn from_text(text: &str) -> Result<Self, InputError> {
        Self::new([text])
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// Keywords requested for a keyword scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRequest {
    keywords: Vec<String>,
}

impl KeywordRequest {
    /// Build from individual keywords. Fails if no non-blank keyword remains.
    pub fn new<I, S>(keywords: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = clean_entries(keywords);
        if keywords.is_empty() {
            return Err(InputError::MissingKeywords);
        }
        Ok(Self { keywords })
    }

    /// Build from text with one keyword per line.
    pub fn from_text(text: &str) -> Result<Self, InputError> {
        Self::new([text])
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_entries() {
        assert_eq!(
            split_entries("  Startdatum \n\n\tBetrag in EUR\n   \n"),
            vec!["Startdatum".to_string(), "Betrag in EUR".to_string()]
        );
    }

    #[test]
    fn test_column_request() {
        let request = ColumnRequest::from_text("Startdatum\nNonexistent").unwrap();
        assert_eq!(request.columns(), &["Startdatum".to_string(), "Nonexistent".to_string()]);
    }

    #[test]
    fn test_blank_requests_are_rejected() {
        assert_eq!(ColumnRequest::from_text(" \n "), Err(InputError::MissingColumns));
        assert_eq!(ColumnRequest::new(Vec::<String>::new()), Err(InputError::MissingColumns));
        assert_eq!(KeywordRequest::new(["", "  "]), Err(InputError::MissingKeywords));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert_eq!(ensure_document(&[]), Err(InputError::MissingDocument));
        assert!(ensure_document(b"%PDF-1.4").is_ok());
    }
}
