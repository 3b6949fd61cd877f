//! 対話式カート作成
//!
//! 検索結果から選んだ商品を、一覧で右スワイプしたのと同じ手順でカートに入れる。

use crate::error::{IndieMartError, Result};
use crate::output::format_product_line;
use dialoguer::MultiSelect;
use indiemart_common::{Cart, Product, SwipeDirection, View};

/// 選択された番号の商品でカートを作る（重複は1件にまとまる）
pub fn build_cart(products: &[Product], selected: &[usize]) -> Cart {
    let mut cart = Cart::new();
    for product in selected.iter().filter_map(|&i| products.get(i)) {
        cart.apply_swipe(View::List, SwipeDirection::Right, product);
    }
    cart
}

/// 対話式で商品を選ぶ
pub fn run_picker(products: &[Product]) -> Result<Cart> {
    let items: Vec<String> = products.iter().map(format_product_line).collect();

    let selected = MultiSelect::new()
        .with_prompt("Pilih barang untuk keranjang (spasi: pilih, enter: selesai)")
        .items(&items)
        .interact()
        .map_err(|e| IndieMartError::Prompt(e.to_string()))?;

    Ok(build_cart(products, &selected))
}
