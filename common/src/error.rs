//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Cart token error: {0}")]
    Token(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown source: {0}")]
    UnknownSource(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 検索リクエストの失敗
///
/// `AsyncData` の中に保持するため `Clone` / `PartialEq` を実装する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// 通信失敗（fetch自体の失敗）
    #[error("network error: {0}")]
    Network(String),

    /// 2xx以外のステータス
    #[error("unexpected status: {0}")]
    Status(u16),

    /// JSONでない、または商品配列でないレスポンス
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Decode(e.to_string())
    }
}
