//! 販売元（小売店）の定義
//!
//! 検索結果の絞り込みと表示ラベル・バッジ色の決定に使う。

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 販売元タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Klikindomaret,
    Alfacart,
    Alfagift,
    Yogyaonline,
}

impl Source {
    /// フィルタバーに表示する販売元（表示順）
    pub const FILTERABLE: [Source; 3] = [
        Source::Klikindomaret,
        Source::Alfagift,
        Source::Yogyaonline,
    ];

    /// 販売元が不明な商品の表示用フォールバック
    pub const DISPLAY_FALLBACK: Source = Source::Alfacart;

    /// APIで使うタグ文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Klikindomaret => "klikindomaret",
            Source::Alfacart => "alfacart",
            Source::Alfagift => "alfagift",
            Source::Yogyaonline => "yogyaonline",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Source::Alfacart | Source::Alfagift => "Alfamart",
            Source::Klikindomaret => "Indomaret",
            Source::Yogyaonline => "Yogya Online",
        }
    }

    /// バッジの色名
    pub fn color(&self) -> &'static str {
        match self {
            Source::Alfacart | Source::Alfagift => "red",
            Source::Klikindomaret => "orange",
            Source::Yogyaonline => "green",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "klikindomaret" => Ok(Source::Klikindomaret),
            "alfacart" => Ok(Source::Alfacart),
            "alfagift" => Ok(Source::Alfagift),
            "yogyaonline" => Ok(Source::Yogyaonline),
            other => Err(Error::UnknownSource(other.to_string())),
        }
    }
}

/// 商品レコードの `source` を読む
///
/// 未知のタグや文字列以外の値は `None` になる。商品自体は捨てない。
pub fn deserialize_lenient<'de, D>(deserializer: D) -> std::result::Result<Option<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|tag| tag.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Source::Alfacart.label(), "Alfamart");
        assert_eq!(Source::Alfagift.label(), "Alfamart");
        assert_eq!(Source::Klikindomaret.label(), "Indomaret");
        assert_eq!(Source::Yogyaonline.label(), "Yogya Online");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Source::Alfagift.color(), "red");
        assert_eq!(Source::Klikindomaret.color(), "orange");
        assert_eq!(Source::Yogyaonline.color(), "green");
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&Source::Klikindomaret).unwrap();
        assert_eq!(json, "\"klikindomaret\"");

        let parsed: Source = serde_json::from_str("\"yogyaonline\"").unwrap();
        assert_eq!(parsed, Source::Yogyaonline);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("alfagift".parse::<Source>().unwrap(), Source::Alfagift);
        assert_eq!(" KlikIndomaret ".parse::<Source>().unwrap(), Source::Klikindomaret);
        assert!(matches!(
            "tokopedia".parse::<Source>(),
            Err(Error::UnknownSource(tag)) if tag == "tokopedia"
        ));
    }

    #[test]
    fn test_filterable_order() {
        let tags: Vec<&str> = Source::FILTERABLE.iter().map(|s| s.as_str()).collect();
        assert_eq!(tags, vec!["klikindomaret", "alfagift", "yogyaonline"]);
    }
}
