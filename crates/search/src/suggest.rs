use armsref_catalog::{FieldValue, Searchable};

const MAX_SUGGESTIONS: usize = 5;

/// Collect up to five follow-up keywords from the collection's text fields.
///
/// Every text value among the named fields is split on whitespace; a token
/// qualifies when it contains the keyword case-insensitively and is
/// strictly longer than it (in characters), so the keyword itself never
/// suggests itself. First-seen order is kept and repeats collapse.
///
/// Numeric and list fields match in the engine but contribute no tokens
/// here; that asymmetry is inherited catalog behavior.
#[must_use]
pub fn suggest<T>(collection: &[T], keyword: &str, fields: &[&str]) -> Vec<String>
where
    T: Searchable,
{
    let keyword_lower = keyword.to_lowercase();
    let keyword_chars = keyword.chars().count();

    let mut suggestions: Vec<String> = Vec::new();
    for record in collection {
        for field in fields {
            let FieldValue::Text(text) = record.field(field) else {
                continue;
            };
            for token in text.split_whitespace() {
                if token.chars().count() > keyword_chars
                    && token.to_lowercase().contains(&keyword_lower)
                    && !suggestions.iter().any(|s| s == token)
                {
                    suggestions.push(token.to_string());
                }
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
