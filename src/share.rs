//! カートファイルと共有URLの相互変換

use crate::config::Config;
use crate::error::{IndieMartError, Result};
use indiemart_common::{share, Cart};
use std::path::Path;

/// カートJSON（商品配列）を読み込む
pub fn read_cart_file(path: &Path) -> Result<Cart> {
    if !path.exists() {
        return Err(IndieMartError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let cart: Cart = serde_json::from_str(&content)?;
    Ok(cart)
}

pub fn write_cart_file(path: &Path, cart: &Cart) -> Result<()> {
    let json = serde_json::to_string_pretty(cart)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// カートから共有URLを作る
pub fn cart_to_url(config: &Config, cart: &Cart) -> Result<String> {
    Ok(share::share_url(&config.share_origin, &config.base_path, cart)?)
}

/// 共有URLまたはトークンからカートを復元する
pub fn link_to_cart(config: &Config, link: &str) -> Result<Cart> {
    let token = share::token_from_link(link, &config.base_path)
        .ok_or_else(|| IndieMartError::MissingToken(link.to_string()))?;
    Ok(share::decode(&token)?)
}
