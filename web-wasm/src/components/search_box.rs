//! 検索ボックスコンポーネント
//!
//! 入力のたびにタイマーを張り直し、最後の入力から `debounce_ms` 経過した値だけを確定する。
//! タイマーはこのコンポーネントが所有し、アンマウント時に破棄する。

use gloo::timers::callback::Timeout;
use indiemart_common::Debouncer;
use leptos::prelude::*;
use crate::browser::now_ms;

#[component]
pub fn SearchBox<F>(
    initial: String,
    debounce_ms: u64,
    on_commit: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let debouncer = StoredValue::new(Debouncer::<String>::new(debounce_ms));
    // Timeout は !Send のためローカル保持。差し替え時の drop でキャンセルされる
    let timer = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        timer.try_update_value(|t| {
            t.take();
        });
        debouncer.try_update_value(|d| d.cancel());
    });

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        let Some(ticket) = debouncer.try_update_value(|d| d.push(value, now_ms())) else {
            return;
        };

        let on_commit = on_commit.clone();
        let delay = u32::try_from(debounce_ms).unwrap_or(u32::MAX);
        let handle = Timeout::new(delay, move || {
            if let Some(query) = debouncer.try_update_value(|d| d.take(ticket)).flatten() {
                on_commit(query);
            }
        });
        timer.set_value(Some(handle));
    };

    view! {
        <input
            type="search"
            class="search-input"
            placeholder="Cari barang yang ingin Kamu mau beli..."
            value=initial
            on:input=on_input
        />
    }
}
