//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::browser::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{APP_NAME}</h1>
        </header>
    }
}
