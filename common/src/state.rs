//! ホーム画面の状態遷移
//!
//! 状態はクエリ変更 / フィルタ変更 / 検索開始 / 検索結果 / スワイプ / ビュー切替 /
//! カート復元 の操作でのみ変化する。UI側はシグナルの中にこの構造体を持ち、
//! 更新クロージャからメソッドを呼ぶ。

use crate::async_data::AsyncData;
use crate::cart::{Cart, CartChange, SwipeDirection, View};
use crate::config::AppConfig;
use crate::error::{Result, SearchError};
use crate::search::{ResponseOrdering, SearchParams};
use crate::share;
use crate::source::Source;
use crate::types::Product;

/// 検索結果の状態
pub type SearchData = AsyncData<Vec<Product>, SearchError>;

/// 発行済みリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    /// 発行順の連番（1始まり）
    pub seq: u64,
    pub params: SearchParams,
}

/// ホーム画面の状態
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub query: String,
    pub filter: Option<Source>,
    pub data: SearchData,
    pub cart: Cart,
    pub view: View,
    ordering: ResponseOrdering,
    issued: u64,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl HomeState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            query: config.default_query.clone(),
            filter: None,
            data: AsyncData::Idle,
            cart: Cart::new(),
            view: View::List,
            ordering: config.ordering,
            issued: 0,
        }
    }

    /// 確定したクエリを反映する（空文字も有効）
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// 販売元を1つだけ選ぶ
    pub fn select_source(&mut self, source: Source) {
        self.filter = Some(source);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn set_filter(&mut self, source: Option<Source>) {
        self.filter = source;
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams::new(self.query.clone(), self.filter)
    }

    /// 新しい検索を発行する。結果は読込中になる。
    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        self.data = AsyncData::Loading;
        SearchTicket {
            seq: self.issued,
            params: self.search_params(),
        }
    }

    /// 検索結果を反映する。破棄した場合は `false`
    pub fn resolve(&mut self, seq: u64, result: std::result::Result<Vec<Product>, SearchError>) -> bool {
        if self.ordering == ResponseOrdering::LatestIssued && seq != self.issued {
            return false;
        }
        self.data = result.into();
        true
    }

    /// 現在のビューで表示する商品
    ///
    /// 一覧: 検索結果からカート投入済みを除いたもの（成功時以外は空）。
    /// カート: カートの中身。
    pub fn visible_products(&self) -> Vec<Product> {
        match self.view {
            View::List => match self.data.data() {
                Some(products) => self.cart.available(products).into_iter().cloned().collect(),
                None => Vec::new(),
            },
            View::Cart => self.cart.items().to_vec(),
        }
    }

    pub fn swipe(&mut self, product: &Product, direction: SwipeDirection) -> CartChange {
        self.cart.apply_swipe(self.view, direction, product)
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    /// 共有トークンからカートを復元し、カート表示に切り替える
    ///
    /// 失敗時は状態を変更しない。
    pub fn restore_cart(&mut self, token: &str) -> Result<()> {
        let cart = share::decode(token)?;
        self.cart = cart;
        self.view = View::Cart;
        Ok(())
    }

    pub fn share_token(&self) -> Result<String> {
        share::encode(&self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::format_idr;
    use crate::search::{decode_products, search_url, ProductSearch};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// 送信内容を記録し、固定のレスポンスを返すクライアント
    struct FakeClient {
        base_url: String,
        response: std::result::Result<String, SearchError>,
        sent: RefCell<Vec<(String, String)>>,
    }

    impl FakeClient {
        fn new(response: std::result::Result<&str, SearchError>) -> Self {
            Self {
                base_url: "/api".to_string(),
                response: response.map(str::to_string),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProductSearch for FakeClient {
        async fn search(&self, params: &SearchParams) -> std::result::Result<Vec<Product>, SearchError> {
            self.sent
                .borrow_mut()
                .push((search_url(&self.base_url), params.to_body()?));
            match &self.response {
                Ok(body) => decode_products(body),
                Err(e) => Err(e.clone()),
            }
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn with_ordering(ordering: ResponseOrdering) -> HomeState {
        HomeState::new(&AppConfig {
            ordering,
            ..Default::default()
        })
    }

    #[test]
    fn test_initial_state() {
        let state = HomeState::default();
        assert_eq!(state.query, "mie");
        assert_eq!(state.filter, None);
        assert_eq!(state.data, AsyncData::Idle);
        assert!(state.cart.is_empty());
        assert_eq!(state.view, View::List);
    }

    #[test]
    fn test_filter_exclusivity() {
        let mut state = HomeState::default();
        state.select_source(Source::Klikindomaret);
        state.select_source(Source::Yogyaonline);
        assert_eq!(state.filter, Some(Source::Yogyaonline));

        state.clear_filter();
        assert_eq!(state.filter, None);
    }

    #[test]
    fn test_search_scenario() {
        let mut state = HomeState::default();
        state.set_query("mie");
        state.select_source(Source::Klikindomaret);

        let client = FakeClient::new(Ok(r#"[{"id":"1","name":"Mie Goreng","prices":5000}]"#));
        let ticket = state.begin_search();
        assert!(state.data.is_loading());

        let result = block_on(client.search(&ticket.params));
        assert!(state.resolve(ticket.seq, result));

        assert_eq!(
            client.sent.borrow().as_slice(),
            &[(
                "/api/search".to_string(),
                r#"{"query":"mie","source":"klikindomaret"}"#.to_string()
            )]
        );

        let visible = state.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].display_name(), "Mie Goreng");
        assert_eq!(format_idr(visible[0].price_or_zero()), "Rp5.000");
    }

    #[test]
    fn test_rejecting_client_sets_error() {
        let mut state = HomeState::default();
        let rejection = SearchError::Network("Failed to fetch".into());
        let client = FakeClient::new(Err(rejection.clone()));

        let ticket = state.begin_search();
        let result = block_on(client.search(&ticket.params));
        state.resolve(ticket.seq, result);

        assert_eq!(state.data, AsyncData::Error(rejection));
        assert!(state.visible_products().is_empty());
    }

    #[test]
    fn test_non_json_body_sets_error() {
        let mut state = HomeState::default();
        let client = FakeClient::new(Ok("<html>Bad Gateway</html>"));

        let ticket = state.begin_search();
        let result = block_on(client.search(&ticket.params));
        state.resolve(ticket.seq, result);

        assert!(matches!(state.data, AsyncData::Error(SearchError::Decode(_))));
    }

    #[test]
    fn test_latest_issued_discards_stale_response() {
        let mut state = with_ordering(ResponseOrdering::LatestIssued);
        state.set_query("a");
        let first = state.begin_search();
        state.set_query("ab");
        let second = state.begin_search();

        assert!(state.resolve(second.seq, Ok(vec![product("new")])));
        assert!(!state.resolve(first.seq, Ok(vec![product("old")])));

        let ids: Vec<_> = state.visible_products().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some("new".to_string())]);
    }

    #[test]
    fn test_last_resolved_lets_stale_response_win() {
        let mut state = with_ordering(ResponseOrdering::LastResolved);
        let first = state.begin_search();
        let second = state.begin_search();

        assert!(state.resolve(second.seq, Ok(vec![product("new")])));
        assert!(state.resolve(first.seq, Ok(vec![product("old")])));

        let ids: Vec<_> = state.visible_products().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some("old".to_string())]);
    }

    #[test]
    fn test_swipe_moves_between_list_and_cart() {
        let mut state = HomeState::default();
        let ticket = state.begin_search();
        state.resolve(ticket.seq, Ok(vec![product("p1"), product("p2")]));

        assert_eq!(state.swipe(&product("p1"), SwipeDirection::Right), CartChange::Added);
        assert_eq!(state.swipe(&product("p1"), SwipeDirection::Right), CartChange::Unchanged);

        let listed: Vec<_> = state.visible_products().into_iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![Some("p2".to_string())]);

        state.toggle_view();
        assert_eq!(state.visible_products(), vec![product("p1")]);

        assert_eq!(state.swipe(&product("p1"), SwipeDirection::Left), CartChange::Removed);
        assert!(state.visible_products().is_empty());
    }

    #[test]
    fn test_restore_cart_switches_to_cart_view() {
        let mut source = HomeState::default();
        source.cart.add(product("p1"));
        source.cart.add(product("p2"));
        let token = source.share_token().unwrap();

        let mut state = HomeState::default();
        state.restore_cart(&token).expect("復元失敗");
        assert_eq!(state.view, View::Cart);
        assert_eq!(state.cart, source.cart);
    }

    #[test]
    fn test_restore_cart_failure_leaves_state_unchanged() {
        let mut state = HomeState::default();
        state.cart.add(product("keep"));
        let before = state.clone();

        assert!(state.restore_cart("not-a-token!!").is_err());
        assert_eq!(state, before);
    }
}
