//! Helpers for the comma-separated tag field.
//!
//! Tags are plain strings kept in the order the user typed them. Matching is
//! case-insensitive but storage preserves the original spelling.

/// Separator used both for user input and for the stored tag field.
pub const TAG_SEPARATOR: char = ',';

/// Parses comma-separated input into a tag list.
///
/// Entries are trimmed; empty entries and exact duplicates are dropped
/// (first occurrence kept).
///
/// ```
/// use jotter::domain::parse_tags;
///
/// assert_eq!(parse_tags(" work, ,urgent,work "), vec!["work", "urgent"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(TAG_SEPARATOR))
}

/// Applies the same trimming and deduplication as [`parse_tags`] to a list.
///
/// An element containing [`TAG_SEPARATOR`] is split into several tags, so
/// the list reads back unchanged from the joined storage field.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result: Vec<String> = Vec::new();
    for tag in tags {
        for piece in tag.as_ref().split(TAG_SEPARATOR) {
            let trimmed = piece.trim();
            if trimmed.is_empty() || result.iter().any(|t| t == trimmed) {
                continue;
            }
            result.push(trimmed.to_string());
        }
    }
    result
}

/// Joins tags into the single stored field. An empty list yields `""`.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(&TAG_SEPARATOR.to_string())
}

/// Returns true if any tag equals `query`, ignoring case.
pub fn has_tag(tags: &[String], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    tags.iter().any(|t| t.to_lowercase() == query)
}
