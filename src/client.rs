//! 検索APIクライアント（reqwest）

use crate::error::{IndieMartError, Result};
use indiemart_common::{
    decode_products, search_url, AppConfig, AsyncData, HomeState, Product, ProductSearch,
    ResponseOrdering, SearchError, SearchParams, Source,
};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("indiemart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IndieMartError::HttpClient(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ProductSearch for HttpClient {
    async fn search(&self, params: &SearchParams) -> std::result::Result<Vec<Product>, SearchError> {
        let url = search_url(&self.base_url);
        let body = params.to_body()?;
        debug!(%url, %body, "POST search");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let products = decode_products(&text)?;
        debug!(count = products.len(), "search response");
        Ok(products)
    }
}

/// 1回検索して商品一覧を返す
///
/// ブラウザ版と同じ状態遷移（検索開始 → 結果反映）を通す。
pub async fn run_search<C: ProductSearch>(
    client: &C,
    ordering: ResponseOrdering,
    query: &str,
    source: Option<Source>,
) -> Result<Vec<Product>> {
    let mut state = HomeState::new(&AppConfig {
        ordering,
        ..Default::default()
    });
    state.set_query(query);
    state.set_filter(source);

    let ticket = state.begin_search();
    let result = client.search(&ticket.params).await;
    state.resolve(ticket.seq, result);

    match state.data {
        AsyncData::Ok(products) => Ok(products),
        AsyncData::Error(e) => Err(e.into()),
        AsyncData::Idle | AsyncData::Loading => Ok(Vec::new()),
    }
}
