//! 設定ファイルテスト

use indiemart::config::{Config, DEFAULT_API_BASE_URL, DEFAULT_SHARE_ORIGIN};
use indiemart_common::ResponseOrdering;
use tempfile::tempdir;

/// 設定ファイルが無ければ既定値
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読込失敗");

    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.share_origin, DEFAULT_SHARE_ORIGIN);
    assert_ne!(config.share_origin, config.api_base_url);
    assert_eq!(config.base_path, "/indiemart/");
    assert_eq!(config.ordering, ResponseOrdering::LatestIssued);
}

/// 保存と再読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_api_base_url("http://localhost:8080/".into()).unwrap();
    config.set_share_origin("https://shop.example".into()).unwrap();
    config.ordering = ResponseOrdering::LastResolved;
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読込失敗");
    assert_eq!(loaded, config);
    assert_eq!(loaded.api_base_url, "http://localhost:8080");
}

/// 一部のキーだけの設定ファイル
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"share_origin": "https://shop.example"}"#).unwrap();

    let config = Config::load_from(&path).expect("読込失敗");
    assert_eq!(config.share_origin, "https://shop.example");
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

/// 壊れた設定ファイル
#[test]
fn test_load_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}
