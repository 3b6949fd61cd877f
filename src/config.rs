use crate::error::{IndieMartError, Result};
use indiemart_common::config::DEFAULT_BASE_PATH;
use indiemart_common::ResponseOrdering;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 開発用プロキシの転送先（`/api` を外した先）
pub const DEFAULT_API_BASE_URL: &str = "http://indiemart.yggdrasil.id";

/// Webアプリの配信元（`trunk serve` の既定アドレス）
pub const DEFAULT_SHARE_ORIGIN: &str = "http://127.0.0.1:8080";

pub const API_BASE_URL_ENV: &str = "INDIEMART_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// 共有URLのオリジン（例: `https://example.com`）
    pub share_origin: String,
    pub base_path: String,
    pub ordering: ResponseOrdering,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| IndieMartError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("indiemart").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            share_origin: DEFAULT_SHARE_ORIGIN.into(),
            base_path: DEFAULT_BASE_PATH.into(),
            ordering: ResponseOrdering::default(),
        }
    }

    /// 検索APIのベースURL（環境変数を優先）
    pub fn api_base_url(&self) -> String {
        Self::resolve_api_base_url(std::env::var(API_BASE_URL_ENV).ok(), &self.api_base_url)
    }

    fn resolve_api_base_url(env_value: Option<String>, configured: &str) -> String {
        match env_value {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => configured.to_string(),
        }
    }

    pub fn set_api_base_url(&mut self, url: String) -> Result<()> {
        self.api_base_url = Self::validate_url(url)?;
        Ok(())
    }

    pub fn set_share_origin(&mut self, origin: String) -> Result<()> {
        self.share_origin = Self::validate_url(origin)?;
        Ok(())
    }

    fn validate_url(url: String) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(trimmed.to_string())
        } else {
            Err(IndieMartError::Config(format!(
                "http:// または https:// で始まるURLを指定してください: {}",
                url
            )))
        }
    }
}
