//! 読込中インジケータ

use gloo::timers::callback::Interval;
use leptos::prelude::*;

/// 1 → 2 → 3 → 1 … と循環するドット数
fn next_dots(prev: usize) -> usize {
    if prev >= 3 { 1 } else { prev + 1 }
}

#[component]
pub fn Loading() -> impl IntoView {
    let (dots, set_dots) = signal(1usize);

    let interval = Interval::new(1000, move || set_dots.update(|d| *d = next_dots(*d)));
    let interval = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        interval.try_update_value(|i| {
            i.take();
        });
    });

    view! {
        <div class="loading" role="status">
            <span class="loading-text">{move || format!("Loading{}", ".".repeat(dots.get()))}</span>
        </div>
    }
}
