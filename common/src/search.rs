//! 商品検索APIの入出力
//!
//! `POST {base}/search` に `{query, source?}` を送り、商品配列を受け取る。
//! 通信そのものはブラウザ（fetch）とCLI（reqwest）がそれぞれ `ProductSearch` を実装する。

use crate::error::SearchError;
use crate::source::Source;
use crate::types::Product;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// 検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, source: Option<Source>) -> Self {
        Self {
            query: query.into(),
            source,
        }
    }

    /// リクエストボディ（JSON）
    pub fn to_body(&self) -> Result<String, SearchError> {
        serde_json::to_string(self).map_err(SearchError::from)
    }
}

/// 検索エンドポイントのURL
pub fn search_url(base_url: &str) -> String {
    format!("{}/search", base_url.trim_end_matches('/'))
}

/// レスポンスボディを商品配列としてパースする
pub fn decode_products(body: &str) -> Result<Vec<Product>, SearchError> {
    let products: Vec<Product> = serde_json::from_str(body)?;
    Ok(products)
}

/// 商品検索の実装
pub trait ProductSearch {
    /// 1回のリクエストを送り、商品配列を返す（リトライ・タイムアウトなし）
    fn search(&self, params: &SearchParams) -> impl Future<Output = Result<Vec<Product>, SearchError>>;
}

/// 古いレスポンスの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// 最後に発行したリクエストの結果だけを反映する
    #[default]
    LatestIssued,
    /// 届いた順にすべて反映する（後から届いた古い結果が上書きし得る）
    LastResolved,
}

impl std::str::FromStr for ResponseOrdering {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim() {
            "latest-issued" => Ok(ResponseOrdering::LatestIssued),
            "last-resolved" => Ok(ResponseOrdering::LastResolved),
            other => Err(crate::error::Error::Config(format!(
                "unknown response ordering: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_with_source() {
        let params = SearchParams::new("mie", Some(Source::Klikindomaret));
        assert_eq!(
            params.to_body().unwrap(),
            r#"{"query":"mie","source":"klikindomaret"}"#
        );
    }

    #[test]
    fn test_body_without_source() {
        let params = SearchParams::new("", None);
        assert_eq!(params.to_body().unwrap(), r#"{"query":""}"#);
    }

    #[test]
    fn test_search_url() {
        assert_eq!(search_url("/api"), "/api/search");
        assert_eq!(search_url("http://indiemart.yggdrasil.id/"), "http://indiemart.yggdrasil.id/search");
    }

    #[test]
    fn test_decode_products() {
        let products = decode_products(r#"[{"id":"1","name":"Mie Goreng","prices":5000}]"#).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].prices, Some(5000.0));
    }

    #[test]
    fn test_decode_products_keeps_unknown_source() {
        let body = r#"[
            {"id":"1","name":"Mie Goreng","prices":5000,"source":"klikindomaret"},
            {"id":"2","name":"Mie Kuah","prices":4500,"source":"tokopedia"}
        ]"#;
        let products = decode_products(body).expect("未知の販売元で失敗してはいけない");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].source, Some(Source::Klikindomaret));
        assert_eq!(products[1].id.as_deref(), Some("2"));
        assert_eq!(products[1].source, None);
    }

    #[test]
    fn test_decode_products_rejects_non_json() {
        assert!(matches!(decode_products("<html>502</html>"), Err(SearchError::Decode(_))));
        assert!(matches!(decode_products(r#"{"error":"x"}"#), Err(SearchError::Decode(_))));
    }

    #[test]
    fn test_response_ordering_parse() {
        assert_eq!("last-resolved".parse::<ResponseOrdering>().unwrap(), ResponseOrdering::LastResolved);
        assert_eq!("latest-issued".parse::<ResponseOrdering>().unwrap(), ResponseOrdering::LatestIssued);
        assert!("random".parse::<ResponseOrdering>().is_err());
    }
}
