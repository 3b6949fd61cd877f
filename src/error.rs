use indiemart_common::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndieMartError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("検索に失敗しました: {0}")]
    Search(#[from] SearchError),

    #[error("共有トークンが見つかりません: {0}")]
    MissingToken(String),

    #[error("カートを読み込めません: {0}")]
    Cart(#[from] indiemart_common::Error),

    #[error("カートが空です")]
    EmptyCart,

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndieMartError>;
