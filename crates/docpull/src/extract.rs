//! Document id extraction from sharable URLs

use crate::error::Error;

/// Path segment that precedes the document id in a sharable URL
const ID_MARKER: &str = "/document/d/";

/// Extract the document id from a sharable document URL.
///
/// The id is the run of URL-safe characters (ASCII alphanumerics, `-`, `_`)
/// immediately following the `/document/d/` path segment. Matching is
/// substring-based, so trailing segments like `/edit` or query strings are
/// ignored.
///
/// Returns [`Error::InvalidInput`] for an empty input and
/// [`Error::ExtractionFailed`] when no id can be found; a partial or empty
/// id is never returned.
///
/// ```
/// use docpull::extract_document_id;
///
/// let id = extract_document_id(
///     "https://docs.google.com/document/d/1aBcD_ef-42/edit?usp=sharing",
/// )
/// .unwrap();
/// assert_eq!(id, "1aBcD_ef-42");
/// ```
pub fn extract_document_id(url: &str) -> Result<String, Error> {
    if url.is_empty() {
        return Err(Error::InvalidInput { field: "url" });
    }

    let start = url
        .find(ID_MARKER)
        .map(|pos| pos + ID_MARKER.len())
        .ok_or(Error::ExtractionFailed)?;

    let id: String = url[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if id.is_empty() {
        return Err(Error::ExtractionFailed);
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_edit_url() {
        let id = extract_document_id("https://docs.google.com/document/d/abc123XYZ/edit").unwrap();
        assert_eq!(id, "abc123XYZ");
    }

    #[test]
    fn test_extract_keeps_hyphen_and_underscore() {
        let id = extract_document_id(
            "https://docs.google.com/document/d/1x_Y-z9/edit#heading=h.abc",
        )
        .unwrap();
        assert_eq!(id, "1x_Y-z9");
    }

    #[test]
    fn test_extract_id_at_end_of_url() {
        let id = extract_document_id("https://docs.google.com/document/d/abc123").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn test_extract_stops_at_query_string() {
        let id =
            extract_document_id("https://docs.google.com/document/d/abc123?usp=sharing").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn test_extract_missing_segment() {
        let err = extract_document_id("https://docs.google.com/spreadsheets/d/abc123").unwrap_err();
        assert!(matches!(err, Error::ExtractionFailed));
    }

    #[test]
    fn test_extract_empty_input() {
        let err = extract_document_id("").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "url" }));
    }

    #[test]
    fn test_extract_marker_with_no_id() {
        let err = extract_document_id("https://docs.google.com/document/d/").unwrap_err();
        assert!(matches!(err, Error::ExtractionFailed));

        let err = extract_document_id("https://docs.google.com/document/d//edit").unwrap_err();
        assert!(matches!(err, Error::ExtractionFailed));
    }
}
