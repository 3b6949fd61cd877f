//! 販売元フィルタコンポーネント
//!
//! 選択状態は親が持つ。

use indiemart_common::Source;
use leptos::prelude::*;

#[component]
pub fn Filter<FS, FC>(
    #[prop(into)] selected: Signal<Option<Source>>,
    on_select: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(Source) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let badges = Source::FILTERABLE
        .into_iter()
        .map(|source| {
            let on_select = on_select.clone();
            view! {
                <span
                    class=move || {
                        let variant = if selected.get() == Some(source) { "solid" } else { "outline" };
                        format!("badge badge-{} {}", source.color(), variant)
                    }
                    on:click=move |_| on_select(source)
                >
                    {source.label()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="filter">
            {badges}
            <Show when=move || selected.get().is_some()>
                <button
                    class="filter-clear"
                    aria-label="Hapus filter"
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
