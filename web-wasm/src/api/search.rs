//! 商品検索API（fetch）

use indiemart_common::{search_url, Product, ProductSearch, SearchError, SearchParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchで検索するクライアント
#[derive(Clone)]
pub struct FetchClient {
    base_url: String,
}

impl FetchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

fn network_error(e: JsValue) -> SearchError {
    SearchError::Network(format!("{:?}", e))
}

fn decode_error(e: JsValue) -> SearchError {
    SearchError::Decode(format!("{:?}", e))
}

impl ProductSearch for FetchClient {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Product>, SearchError> {
        let url = search_url(&self.base_url);
        let body = params.to_body()?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(network_error)?;

        let window = web_sys::window()
            .ok_or_else(|| SearchError::Network("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        if !resp.ok() {
            return Err(SearchError::Status(resp.status()));
        }

        // JSONでないボディは resp.json() の時点で失敗する
        let json = JsFuture::from(resp.json().map_err(decode_error)?)
            .await
            .map_err(decode_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| SearchError::Decode(e.to_string()))
    }
}
