//! メインアプリケーションコンポーネント

use gloo::timers::callback::Timeout;
use indiemart_common::{share, AppConfig, HomeState, Product, ProductSearch, Source, SwipeDirection};
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::FetchClient;
use crate::browser;
use crate::components::{
    cart_bar::{CartBar, Notice},
    filter::Filter,
    footer::Footer,
    header::Header,
    loading::Loading,
    product_list::ProductList,
    search_box::SearchBox,
};

/// 通知の表示時間（ms）
const NOTICE_MS: u32 = 3000;

const ERROR_MESSAGE: &str = "Kesalahan terjadi, tapi bukan dari kamu kok! :(";

/// 起動時の状態（パスに共有トークンがあればカートを復元）
fn initial_state(config: &AppConfig) -> HomeState {
    let mut state = HomeState::new(config);

    let token = browser::current_path()
        .and_then(|path| share::token_from_path(&path, &config.base_path));
    if let Some(token) = token {
        match state.restore_cart(&token) {
            Ok(()) => log!("共有カートを復元: {}件", state.cart.len()),
            Err(e) => warn!("共有カートの復元に失敗: {}", e),
        }
    }

    state
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        error!("設定エラー、既定値を使用: {}", e);
        AppConfig::default()
    });

    // アプリケーション状態
    let (state, set_state) = signal(initial_state(&config));
    let (notice, set_notice) = signal(None::<Notice>);

    let filter = Memo::new(move |_| state.with(|s| s.filter));
    let view_mode = Memo::new(move |_| state.with(|s| s.view));
    let cart_len = Memo::new(move |_| state.with(|s| s.cart.len()));
    let is_loading = Memo::new(move |_| state.with(|s| s.data.is_loading()));
    let is_error = Memo::new(move |_| state.with(|s| s.data.is_error()));
    let visible = Memo::new(move |_| state.with(|s| s.visible_products()));
    let search_params = Memo::new(move |_| state.with(|s| s.search_params()));

    // クエリ・フィルタが変わるたびに検索
    let client = FetchClient::new(config.api_base_url.clone());
    Effect::new(move |_| {
        search_params.track();
        let Some(ticket) = set_state.try_update(|s| s.begin_search()) else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let result = client.search(&ticket.params).await;
            if let Err(e) = &result {
                error!("検索失敗 #{}: {}", ticket.seq, e);
            }
            set_state.update(|s| {
                if !s.resolve(ticket.seq, result) {
                    log!("古い検索結果を破棄: #{}", ticket.seq);
                }
            });
        });
    });

    // 検索ボックス確定ハンドラ
    let on_commit = move |query: String| set_state.update(|s| s.set_query(query));

    // フィルタハンドラ
    let on_select = move |source: Source| set_state.update(|s| s.select_source(source));
    let on_clear = move |_: ()| set_state.update(|s| s.clear_filter());

    // スワイプハンドラ
    let on_swipe = move |product: Product, direction: SwipeDirection| {
        set_state.update(|s| {
            s.swipe(&product, direction);
        });
    };

    let on_toggle = move |_: ()| set_state.update(|s| s.toggle_view());

    // 共有ハンドラ
    let base_path = config.base_path.clone();
    let on_share = move |_: ()| {
        let cart = state.with_untracked(|s| s.cart.clone());
        let origin = browser::current_origin().unwrap_or_default();
        let base_path = base_path.clone();

        spawn_local(async move {
            let result = match share::share_url(&origin, &base_path, &cart) {
                Ok(url) => browser::copy_to_clipboard(&url).await,
                Err(e) => Err(e.to_string()),
            };
            let next = match result {
                Ok(()) => Notice::Copied,
                Err(e) => {
                    error!("共有リンクのコピーに失敗: {}", e);
                    Notice::CopyFailed
                }
            };
            set_notice.set(Some(next));
            Timeout::new(NOTICE_MS, move || set_notice.set(None)).forget();
        });
    };

    let initial_query = state.with_untracked(|s| s.query.clone());

    view! {
        <div class="container">
            <Header />

            <main class="home">
                <div class="controls">
                    <SearchBox
                        initial=initial_query
                        debounce_ms=config.debounce_ms
                        on_commit=on_commit
                    />
                    <Filter selected=filter on_select=on_select on_clear=on_clear />
                    <CartBar
                        view_mode=view_mode
                        cart_len=cart_len
                        notice=notice
                        on_toggle=on_toggle
                        on_share=on_share
                    />
                </div>

                <Show when=move || is_error.get()>
                    <div class="alert alert-error" role="alert">{ERROR_MESSAGE}</div>
                </Show>

                <Show when=move || is_loading.get()>
                    <Loading />
                </Show>

                <ProductList products=visible view_mode=view_mode on_swipe=on_swipe />
            </main>

            <Footer />
        </div>
    }
}
