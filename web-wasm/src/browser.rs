//! ブラウザAPIの薄いラッパー

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub const APP_NAME: &str = "IndieMart";
pub const APP_DESCRIPTION: &str = "IndieMart - Mau Beli apa dahhhh.";

#[wasm_bindgen]
extern "C" {
    /// navigator.clipboard が無い環境（非HTTPS等）では例外になる
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = "writeText", catch)]
    fn clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

/// 現在のパス（例: `/indiemart/<token>`）
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// 現在のオリジン（例: `https://example.com`）
pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// クリップボードへ書き込む
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let promise = clipboard_write_text(text).map_err(|e| format!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// タイトルとmetaタグを設定
pub fn apply_meta() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(APP_NAME);

    let Some(head) = document.head() else {
        return;
    };
    let metas = [
        ("description", APP_DESCRIPTION),
        ("application-name", APP_NAME),
        ("apple-mobile-web-app-capable", "yes"),
        ("apple-mobile-web-app-status-bar-style", "default"),
        ("apple-mobile-web-app-title", APP_NAME),
        ("format-detection", "telephone=no"),
        ("mobile-web-app-capable", "yes"),
        ("theme-color", "#FFFFFF"),
    ];

    for (name, content) in metas {
        let selector = format!("meta[name=\"{}\"]", name);
        let existing = document.query_selector(&selector).ok().flatten();
        let element = match existing {
            Some(el) => el,
            None => match document.create_element("meta") {
                Ok(el) => {
                    let _ = head.append_child(&el);
                    el
                }
                Err(_) => continue,
            },
        };
        let _ = element.set_attribute("name", name);
        let _ = element.set_attribute("content", content);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_apply_meta_sets_title_and_description() {
        apply_meta();
        apply_meta();

        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        assert_eq!(document.title(), APP_NAME);
        let metas = document
            .query_selector_all("meta[name=\"description\"]")
            .expect("query failed");
        assert_eq!(metas.length(), 1);
    }

    #[wasm_bindgen_test]
    fn wasm_current_path_is_available() {
        assert!(current_path().is_some_and(|p| p.starts_with('/')));
        assert!(current_year() >= 2024);
    }
}
