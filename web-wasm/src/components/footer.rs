//! フッターコンポーネント

use leptos::prelude::*;
use crate::browser::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="text-muted">{format!("{} - IndieMarT", current_year())}</p>
        </footer>
    }
}
