//! 商品データの型定義
//!
//! 検索APIのレスポンス、カート、共有トークンの中身はすべてこの型。

use crate::source::Source;
use serde::{Deserialize, Serialize};

/// 画像URLが無い商品に表示する画像
pub const PLACEHOLDER_IMAGE: &str = "https://2.bp.blogspot.com/-ttF34uoSnKI/WOTWd_AP7hI/AAAAAAAABzE/PY-iXu-nTRYwAF2vYbOmFBs4a-bHgKt0gCLcB/s1600/20170404_170812.jpg";

/// 商品レコード
///
/// すべてのフィールドは省略可能。`id` がある場合のみカートの同一性判定に使う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// 未知の販売元タグは `None` として読む
    #[serde(
        deserialize_with = "crate::source::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<Source>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// 価格（ルピア）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<f64>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    pub fn price_or_zero(&self) -> f64 {
        self.prices.unwrap_or(0.0)
    }

    /// 表示用の販売元（不明な場合は Alfacart 扱い）
    pub fn display_source(&self) -> Source {
        self.source.unwrap_or(Source::DISPLAY_FALLBACK)
    }

    /// 一覧描画用のキー
    pub fn list_key(&self, index: usize) -> String {
        match (&self.id, &self.name) {
            (Some(id), _) => id.clone(),
            (None, Some(name)) => format!("{}-{}", name, index),
            (None, None) => index.to_string(),
        }
    }

    /// 同じ商品かどうか
    ///
    /// 両方に `id` があれば `id` で比較し、そうでなければ全フィールドで比較する。
    pub fn same_item(&self, other: &Product) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}
