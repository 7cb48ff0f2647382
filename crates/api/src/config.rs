use std::path::{Path, PathBuf};

use serde::Deserialize;

use armsref_catalog::{AMMUNITION_PAGE_SIZE, ARTILLERY_PAGE_SIZE, COUNTRY_PAGE_SIZE};

use crate::error::{ApiError, Result};

/// Simulated transport latency, sampled uniformly per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    /// The 800-1500 ms profile used for demo transport simulation.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            min_ms: 800,
            max_ms: 1500,
        }
    }
}

/// Facade configuration, loadable from TOML.
///
/// Defaults are test-friendly: reference page caps, no latency, in-memory
/// history unless a path is given.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub country_page_size: usize,
    pub ammunition_page_size: usize,
    pub artillery_page_size: usize,
    /// History file location; `None` keeps history in memory only.
    pub history_path: Option<PathBuf>,
    /// Artificial delay in front of each call; `None` disables it.
    pub latency: Option<LatencyRange>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            country_page_size: COUNTRY_PAGE_SIZE,
            ammunition_page_size: AMMUNITION_PAGE_SIZE,
            artillery_page_size: ARTILLERY_PAGE_SIZE,
            history_path: None,
            latency: None,
        }
    }
}

impl ApiConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| ApiError::Transport(format!("bad config: {err}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ApiError::Transport(format!("config {}: {err}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_reference_page_caps() {
        let config = ApiConfig::default();
        assert_eq!(config.country_page_size, 20);
        assert_eq!(config.ammunition_page_size, 30);
        assert_eq!(config.artillery_page_size, 25);
        assert_eq!(config.latency, None);
    }

    #[test]
    fn parses_partial_toml() {
        let config = ApiConfig::from_toml_str(
            r#"
            ammunition_page_size = 5

            [latency]
            min_ms = 800
            max_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.ammunition_page_size, 5);
        assert_eq!(config.country_page_size, 20);
        assert_eq!(config.latency, Some(LatencyRange::simulated()));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ApiConfig::from_toml_str("page_size = 9").is_err());
    }
}
