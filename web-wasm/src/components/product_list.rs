//! 商品一覧コンポーネント
//!
//! 各カードはスワイプ可能。一覧では右スワイプでカートへ、カート表示では左スワイプで削除。

use indiemart_common::{format_idr, Product, SwipeDirection, View};
use leptos::prelude::*;
use web_sys::PointerEvent;

/// スワイプと判定する水平移動量（px）
const SWIPE_THRESHOLD_PX: f64 = 80.0;

#[component]
pub fn ProductList<FS>(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] view_mode: Signal<View>,
    on_swipe: FS,
) -> impl IntoView
where
    FS: Fn(Product, SwipeDirection) + 'static + Clone + Send + Sync,
{
    view! {
        <ul class="product-grid">
            <For
                each={move || products.get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(index, product): &(usize, Product)| product.list_key(*index)}
                children={move |(_, product): (usize, Product)| {
                    let on_swipe = on_swipe.clone();
                    view! {
                        <li class="product-grid-item">
                            <SwipeCard product=product view_mode=view_mode on_swipe=on_swipe />
                        </li>
                    }
                }}
            />
        </ul>
    }
}

#[component]
fn SwipeCard<FS>(
    product: Product,
    view_mode: Signal<View>,
    on_swipe: FS,
) -> impl IntoView
where
    FS: Fn(Product, SwipeDirection) + 'static + Clone + Send + Sync,
{
    let (start_x, set_start_x) = signal(None::<f64>);
    let (offset, set_offset) = signal(0.0f64);

    let reset = move || {
        set_start_x.set(None);
        set_offset.set(0.0);
    };

    let on_pointerdown = move |ev: PointerEvent| {
        set_start_x.set(Some(f64::from(ev.client_x())));
    };

    let on_pointermove = move |ev: PointerEvent| {
        if let Some(x0) = start_x.get_untracked() {
            set_offset.set(f64::from(ev.client_x()) - x0);
        }
    };

    let on_pointerup = {
        let product = product.clone();
        move |ev: PointerEvent| {
            if let Some(x0) = start_x.get_untracked() {
                let dx = f64::from(ev.client_x()) - x0;
                if let Some(direction) = SwipeDirection::from_delta(dx, SWIPE_THRESHOLD_PX) {
                    on_swipe(product.clone(), direction);
                }
            }
            reset();
        }
    };

    let hint = move || match view_mode.get() {
        View::List => "Geser ke kanan untuk masuk keranjang →",
        View::Cart => "← Geser ke kiri untuk hapus",
    };

    view! {
        <div
            class="swipe-surface"
            class:swiping=move || start_x.get().is_some()
            style:touch-action="pan-y"
            style:transform=move || format!("translateX({}px)", offset.get())
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=move |_| reset()
        >
            <ProductCard product=product />
            <p class="swipe-hint text-muted">{hint}</p>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let name = product.display_name().to_string();
    let image = product.image_or_placeholder().to_string();
    let price = format_idr(product.price_or_zero());
    let source = product.display_source();
    let title = name.clone();
    let alt = name.clone();

    view! {
        <div class="product-card" title=title>
            <img src=image alt=alt draggable="false" />
            <p class="product-name">{name}</p>
            <p class="product-price">{price}</p>
            <span class=format!("source-badge badge-{}", source.color())>{source.label()}</span>
            {product.link.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="product-link">
                    "Lihat di toko"
                </a>
            })}
        </div>
    }
}
