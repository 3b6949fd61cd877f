//! アプリ設定
//!
//! ブラウザ版はビルド時の環境変数で上書きする:
//! - `INDIEMART_API_BASE_URL` 検索APIのベースURL（既定 `/api`）
//! - `INDIEMART_BASE_PATH` アプリの配置パス（既定 `/indiemart/`）
//! - `INDIEMART_RESPONSE_ORDERING` `latest-issued` / `last-resolved`

use crate::error::Result;
use crate::search::ResponseOrdering;
use crate::share::normalize_base_path;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_BASE_PATH: &str = "/indiemart/";
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_QUERY: &str = "mie";

/// 画面と検索の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub base_path: String,
    pub debounce_ms: u64,
    pub default_query: String,
    pub ordering: ResponseOrdering,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_query: DEFAULT_QUERY.to_string(),
            ordering: ResponseOrdering::default(),
        }
    }
}

impl AppConfig {
    /// ビルド時の環境変数から組み立てる
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(
            option_env!("INDIEMART_API_BASE_URL"),
            option_env!("INDIEMART_BASE_PATH"),
            option_env!("INDIEMART_RESPONSE_ORDERING"),
        )
    }

    /// 空文字は未指定として扱う
    pub fn from_values(
        api_base_url: Option<&str>,
        base_path: Option<&str>,
        ordering: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = api_base_url.filter(|s| !s.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(path) = base_path.filter(|s| !s.trim().is_empty()) {
            config.base_path = normalize_base_path(path);
        }
        if let Some(ordering) = ordering.filter(|s| !s.trim().is_empty()) {
            config.ordering = ordering.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.base_path, "/indiemart/");
        assert_eq!(config.debounce_ms, 1000);
        assert_eq!(config.default_query, "mie");
        assert_eq!(config.ordering, ResponseOrdering::LatestIssued);
    }

    #[test]
    fn test_from_values_overrides() {
        let config = AppConfig::from_values(
            Some("https://api.example.com"),
            Some("shop"),
            Some("last-resolved"),
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.base_path, "/shop/");
        assert_eq!(config.ordering, ResponseOrdering::LastResolved);
    }

    #[test]
    fn test_from_values_ignores_empty() {
        let config = AppConfig::from_values(Some(""), Some("  "), None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_values_rejects_unknown_ordering() {
        assert!(AppConfig::from_values(None, None, Some("fastest")).is_err());
    }
}
