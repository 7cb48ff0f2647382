use std::sync::Arc;

use armsref_api::{keyword_from_query, ApiConfig, Client};
use armsref_history::{FileHistoryStore, HistoryStore};

#[tokio::test]
async fn url_keyword_drives_a_search_and_lands_in_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileHistoryStore::new(dir.path().join("history.json")));
    let client = Client::with_history_store(ApiConfig::default(), store.clone());

    let keyword = keyword_from_query("?q=%E6%A6%B4%E5%BC%B9%E7%82%AE").unwrap(); // 榴弹炮
    let result = client.search_artillery(&keyword).await.unwrap();
    assert_eq!(result.total, 7);
    assert!(result.suggestions.len() <= 5);

    client.record_search(&keyword);
    assert_eq!(store.history(), vec!["榴弹炮"]);

    // A later session sees the persisted entry.
    let reopened = FileHistoryStore::new(dir.path().join("history.json"));
    assert_eq!(reopened.history(), vec!["榴弹炮"]);
}

#[tokio::test]
async fn config_page_caps_bound_each_dataset() {
    let config = ApiConfig {
        artillery_page_size: 3,
        ..ApiConfig::default()
    };
    let client = Client::new(config);

    let result = client.search_artillery("榴弹炮").await.unwrap();
    assert_eq!(result.data.len(), 3);
    assert_eq!(result.total, 7);
}
