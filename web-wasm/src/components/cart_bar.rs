//! 一覧/カート切替と共有ボタン

use indiemart_common::View;
use leptos::prelude::*;

/// 共有操作の結果通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Copied => "Link keranjang sudah disalin!",
            Notice::CopyFailed => "Gagal menyalin link keranjang :(",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Copied => "notice notice-success",
            Notice::CopyFailed => "notice notice-error",
        }
    }
}

#[component]
pub fn CartBar<FT, FS>(
    #[prop(into)] view_mode: Signal<View>,
    #[prop(into)] cart_len: Signal<usize>,
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_toggle: FT,
    on_share: FS,
) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="cart-bar">
            <button
                class="btn btn-secondary"
                on:click={
                    let on_toggle = on_toggle.clone();
                    move |_| on_toggle(())
                }
            >
                {move || match view_mode.get() {
                    View::List => format!("Keranjang ({})", cart_len.get()),
                    View::Cart => "Kembali ke hasil pencarian".to_string(),
                }}
            </button>

            <button
                class="btn btn-primary"
                disabled=move || cart_len.get() == 0
                on:click={
                    let on_share = on_share.clone();
                    move |_| on_share(())
                }
            >
                "Bagikan keranjang"
            </button>

            {move || notice.get().map(|n| view! {
                <span class=n.class() role="status">{n.message()}</span>
            })}
        </div>
    }
}
