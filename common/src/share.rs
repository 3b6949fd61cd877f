//! カート共有トークン
//!
//! カート → JSON → Base64 → URLエスケープ でトークンを作り、
//! 共有URLのパス末尾に埋め込む。読み込み時は逆順に復元する。
//! 署名やチェックサムは無い（端末ローカルの利便機能であり、信頼境界ではない）。

use crate::cart::Cart;
use crate::error::{Error, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// 標準アルファベット（パディング有無を問わない）
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// URLセーフアルファベット（パディング有無を問わない）
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// カートをトークンにする
pub fn encode(cart: &Cart) -> Result<String> {
    let json = serde_json::to_string(cart)?;
    let b64 = STANDARD.encode(json.as_bytes());
    Ok(urlencoding::encode(&b64).into_owned())
}

/// トークンからカートを復元する
pub fn decode(token: &str) -> Result<Cart> {
    let unescaped = urlencoding::decode(token.trim())?;
    let b64 = unescaped.trim();
    if b64.is_empty() {
        return Err(Error::Token("empty token".into()));
    }

    let bytes = if b64.contains(['-', '_']) {
        URL_SAFE_LENIENT.decode(b64)?
    } else {
        STANDARD_LENIENT.decode(b64)?
    };
    let json = String::from_utf8(bytes)?;
    let cart: Cart = serde_json::from_str(&json)?;
    Ok(cart)
}

/// ベースパスを `/xxx/` 形式に揃える
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// 共有URLを組み立てる
///
/// `origin` は `https://example.com` のようなスキーム+ホスト。
pub fn share_url(origin: &str, base_path: &str, cart: &Cart) -> Result<String> {
    let token = encode(cart)?;
    Ok(format!(
        "{}{}{}",
        origin.trim_end_matches('/'),
        normalize_base_path(base_path),
        token
    ))
}

/// ページのパスからトークン部分を取り出す
///
/// ベースパス直下の最初のセグメントをトークンとみなす。無ければ `None`。
pub fn token_from_path(path: &str, base_path: &str) -> Option<String> {
    let base = normalize_base_path(base_path);
    let rest = path
        .strip_prefix(base.as_str())
        .or_else(|| path.strip_prefix(base.trim_end_matches('/')))
        .unwrap_or(path);

    rest.trim_matches('/')
        .split('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// 共有URLまたはトークン文字列からトークンを取り出す
pub fn token_from_link(link: &str, base_path: &str) -> Option<String> {
    let link = link.trim();
    match link.split_once("://") {
        Some((_, after_scheme)) => {
            let path_start = after_scheme.find('/')?;
            let path = &after_scheme[path_start..];
            let path = path.split(['?', '#']).next().unwrap_or(path);
            token_from_path(path, base_path)
        }
        None if link.is_empty() => None,
        None => token_from_path(link, base_path),
    }
}
