use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use armsref_catalog::{
    ammunition, artillery, countries, Ammunition, Artillery, Country, AMMUNITION_FIELDS,
    ARTILLERY_FIELDS, COUNTRY_FIELDS,
};
use armsref_history::{FileHistoryStore, HistoryStore, MemoryHistoryStore};
use armsref_search::{search, SearchResult};

use crate::config::ApiConfig;
use crate::error::Result;

/// Curated hot keywords for the search landing view. A fixed editorial
/// list, not derived from the datasets.
pub const HOT_KEYWORDS: &[&str] = &[
    "美国",
    "俄罗斯",
    "中国",
    "德国",
    "法国",
    "榴弹炮",
    "导弹",
    "火箭炮",
    "迫击炮",
    "155mm",
    "120mm",
    "105mm",
];

/// Combined result of querying every dataset with one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllResults {
    pub countries: SearchResult<Country>,
    pub ammunition: SearchResult<Ammunition>,
    pub artillery: SearchResult<Artillery>,
}

/// Dataset-bound search facade.
///
/// Each operation binds the pure engine to one dataset with its fixed
/// field list and page cap, with an optional simulated-latency pause in
/// front. History lives behind an injected [`HistoryStore`].
pub struct Client {
    config: ApiConfig,
    history: Arc<dyn HistoryStore>,
}

impl Client {
    /// Build a client from config. A configured `history_path` gets a
    /// file-backed store; otherwise history stays in memory.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let history: Arc<dyn HistoryStore> = match &config.history_path {
            Some(path) => Arc::new(FileHistoryStore::new(path.clone())),
            None => Arc::new(MemoryHistoryStore::new()),
        };
        Self { config, history }
    }

    /// Build a client with an injected history store (used by tests and
    /// by hosts that bring their own storage).
    #[must_use]
    pub fn with_history_store(config: ApiConfig, history: Arc<dyn HistoryStore>) -> Self {
        Self { config, history }
    }

    async fn simulate_latency(&self) {
        let Some(range) = self.config.latency else {
            return;
        };
        let ms = {
            let mut rng = rand::thread_rng();
            rng.gen_range(range.min_ms..=range.max_ms.max(range.min_ms))
        };
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }

    pub async fn search_countries(&self, keyword: &str) -> Result<SearchResult<Country>> {
        self.simulate_latency().await;
        Ok(search(
            countries(),
            keyword,
            COUNTRY_FIELDS,
            self.config.country_page_size,
        ))
    }

    pub async fn search_ammunition(&self, keyword: &str) -> Result<SearchResult<Ammunition>> {
        self.simulate_latency().await;
        Ok(search(
            ammunition(),
            keyword,
            AMMUNITION_FIELDS,
            self.config.ammunition_page_size,
        ))
    }

    pub async fn search_artillery(&self, keyword: &str) -> Result<SearchResult<Artillery>> {
        self.simulate_latency().await;
        Ok(search(
            artillery(),
            keyword,
            ARTILLERY_FIELDS,
            self.config.artillery_page_size,
        ))
    }

    /// Query all three datasets concurrently with the same keyword.
    pub async fn search_all(&self, keyword: &str) -> Result<AllResults> {
        let (countries, ammunition, artillery) = tokio::join!(
            self.search_countries(keyword),
            self.search_ammunition(keyword),
            self.search_artillery(keyword),
        );
        Ok(AllResults {
            countries: countries?,
            ammunition: ammunition?,
            artillery: artillery?,
        })
    }

    pub async fn hot_keywords(&self) -> Vec<String> {
        self.simulate_latency().await;
        HOT_KEYWORDS.iter().map(|s| (*s).to_string()).collect()
    }

    /// Stored search history, most recent first. Fails open to empty.
    #[must_use]
    pub fn search_history(&self) -> Vec<String> {
        self.history.history()
    }

    /// Record a submitted keyword. Storage failures are logged and
    /// swallowed; losing a history entry must never fail a search.
    pub fn record_search(&self, keyword: &str) {
        if let Err(err) = self.history.record(keyword) {
            log::warn!("failed to record search history: {err}");
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn country_search_uses_the_reference_cap() {
        let client = Client::default();
        let result = client.search_countries("").await.unwrap();
        assert_eq!(result.total, countries().len());
        assert!(result.data.len() <= 20);
    }

    #[tokio::test]
    async fn ammunition_caliber_query_matches_numerically() {
        let client = Client::default();
        let result = client.search_ammunition("120").await.unwrap();
        assert!(result.data.iter().any(|a| a.name == "红箭-12反坦克导弹"));
    }

    #[tokio::test]
    async fn search_all_shares_the_keyword() {
        let client = Client::default();
        let all = client.search_all("美国").await.unwrap();
        assert_eq!(all.countries.keyword, "美国");
        assert_eq!(all.ammunition.keyword, "美国");
        assert_eq!(all.artillery.keyword, "美国");
        assert_eq!(all.countries.total, 1);
        assert!(all.ammunition.total >= 2);
    }

    #[tokio::test]
    async fn history_round_trip_through_the_client() {
        let client = Client::default();
        client.record_search("155mm");
        client.record_search("导弹");
        client.record_search("155mm");
        assert_eq!(client.search_history(), vec!["155mm", "导弹"]);
    }

    #[tokio::test]
    async fn hot_keywords_are_fixed() {
        let client = Client::default();
        let hot = client.hot_keywords().await;
        assert_eq!(hot.len(), 12);
        assert_eq!(hot[0], "美国");
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_applied_outside_the_engine() {
        let config = ApiConfig {
            latency: Some(crate::LatencyRange {
                min_ms: 800,
                max_ms: 800,
            }),
            ..ApiConfig::default()
        };
        let client = Client::new(config);
        let before = tokio::time::Instant::now();
        client.search_artillery("155").await.unwrap();
        assert!(before.elapsed() >= std::time::Duration::from_millis(800));
    }
}
