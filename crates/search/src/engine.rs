use armsref_catalog::{FieldValue, Searchable};
use serde::{Deserialize, Serialize};

use crate::suggest::suggest;

/// Outcome of one catalog query.
///
/// `data` is capped at the page size; `total` counts every match in the
/// collection. Built fresh per call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub keyword: String,
    pub suggestions: Vec<String>,
}

/// Filter `collection` by case-insensitive substring match of `keyword`
/// over the named fields.
///
/// A blank keyword browses: the first `page_size` records come back
/// unfiltered with an empty keyword and no suggestions. Otherwise a record
/// matches when any listed field matches — text and text-list fields by
/// case-insensitive containment, numeric fields by containment in their
/// decimal rendering. Collection order is preserved; only `data` is capped
/// by `page_size`, never `total`.
///
/// Pure and infallible: unknown fields simply never match, and any
/// transport concern (latency, failure) belongs to the caller.
#[must_use]
pub fn search<T>(
    collection: &[T],
    keyword: &str,
    fields: &[&str],
    page_size: usize,
) -> SearchResult<T>
where
    T: Searchable + Clone,
{
    if keyword.trim().is_empty() {
        return SearchResult {
            data: collection.iter().take(page_size).cloned().collect(),
            total: collection.len(),
            keyword: String::new(),
            suggestions: Vec::new(),
        };
    }

    let keyword_lower = keyword.to_lowercase();
    let matches: Vec<&T> = collection
        .iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| field_matches(record.field(field), keyword, &keyword_lower))
        })
        .collect();

    log::debug!(
        "search: keyword='{}', fields={:?}, matches={}/{}",
        keyword,
        fields,
        matches.len(),
        collection.len()
    );

    // Suggestions scan the full collection, not just the returned page.
    let suggestions = suggest(collection, keyword, fields);

    SearchResult {
        total: matches.len(),
        data: matches.into_iter().take(page_size).cloned().collect(),
        keyword: keyword.to_string(),
        suggestions,
    }
}

fn field_matches(value: FieldValue<'_>, keyword: &str, keyword_lower: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(keyword_lower),
        // Digits have no case; the raw keyword is tested against the
        // shortest decimal rendering ("120", "6.3").
        FieldValue::Number(n) => n.to_string().contains(keyword),
        FieldValue::TextList(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(keyword_lower)),
        FieldValue::Absent => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armsref_catalog::{
        ammunition, artillery, countries, AMMUNITION_FIELDS, AMMUNITION_PAGE_SIZE,
        ARTILLERY_FIELDS, COUNTRY_FIELDS,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_keyword_browses_first_page() {
        let result = search(countries(), "   ", COUNTRY_FIELDS, 3);
        assert_eq!(result.data.len(), 3);
        assert_eq!(result.total, countries().len());
        assert_eq!(result.keyword, "");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn blank_keyword_with_oversized_page_returns_everything() {
        let result = search(countries(), "", COUNTRY_FIELDS, 500);
        assert_eq!(result.data.len(), countries().len());
        assert_eq!(result.total, countries().len());
    }

    #[test]
    fn case_insensitive_matching() {
        let lower = search(countries(), "china", COUNTRY_FIELDS, 20);
        let upper = search(countries(), "CHINA", COUNTRY_FIELDS, 20);
        assert_eq!(lower.data, upper.data);
        assert_eq!(lower.total, 1);
        assert_eq!(lower.data[0].name_en, "China");
    }

    #[test]
    fn page_cap_bounds_data_not_total() {
        // "榴弹炮" appears in every artillery record name.
        let result = search(artillery(), "榴弹炮", ARTILLERY_FIELDS, 2);
        assert_eq!(result.data.len(), 2);
        assert!(result.total > 2);
    }

    #[test]
    fn numeric_substring_matches_caliber() {
        let result = search(ammunition(), "120", AMMUNITION_FIELDS, AMMUNITION_PAGE_SIZE);
        assert!(result.data.iter().any(|a| a.name == "红箭-12反坦克导弹"));
        // AIM-120 also carries "120" in its name; every hit must contain
        // "120" in some searched field.
        for ammo in &result.data {
            let in_name = ammo.name.contains("120");
            let in_caliber = ammo.caliber.to_string().contains("120");
            assert!(in_name || in_caliber, "spurious match: {}", ammo.name);
        }
    }

    #[test]
    fn fractional_numbers_render_shortest() {
        // RPG-7 weighs 6.3 kg; the decimal rendering must match "6.3".
        let result = search(ammunition(), "6.3", &["weight"], 30);
        assert_eq!(result.total, 1);
        assert_eq!(result.data[0].abbreviation, "RPG-7");
    }

    #[test]
    fn list_field_element_matches_country() {
        // "铁穹" appears only inside Israel's products array.
        let result = search(countries(), "铁穹", COUNTRY_FIELDS, 20);
        assert_eq!(result.total, 1);
        assert_eq!(result.data[0].name_en, "Israel");
    }

    #[test]
    fn match_order_follows_collection_order() {
        let result = search(ammunition(), "导弹", AMMUNITION_FIELDS, 30);
        let ids: Vec<u32> = result.data.iter().map(|a| a.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn unknown_fields_never_match() {
        let result = search(countries(), "China", &["bogus"], 20);
        assert_eq!(result.total, 0);
        assert!(result.data.is_empty());
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        let result = search(countries(), "zzzz-no-such-thing", COUNTRY_FIELDS, 20);
        assert_eq!(result.total, 0);
        assert!(result.data.is_empty());
        assert_eq!(result.keyword, "zzzz-no-such-thing");
    }
}
