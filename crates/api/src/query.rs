use url::form_urlencoded;

/// Extract the initial keyword from a page query string.
///
/// Accepts the raw query with or without the leading `?`. Only a
/// non-blank `q` parameter counts; the first one wins.
#[must_use]
pub fn keyword_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == "q" && !value.trim().is_empty())
        .map(|(_, value)| value.into_owned())
}
