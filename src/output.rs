//! 検索結果の端末表示

use indiemart_common::{format_idr, Product};

/// 1商品を1行で表示する
pub fn format_product_line(product: &Product) -> String {
    let mut line = format!(
        "{}  {}  [{}]",
        product.display_name(),
        format_idr(product.price_or_zero()),
        product.display_source().label()
    );
    if let Some(link) = product.link.as_deref().filter(|l| !l.is_empty()) {
        line.push_str("  ");
        line.push_str(link);
    }
    line
}

/// 番号付きの一覧
pub fn format_product_list(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}. {}", i + 1, format_product_line(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indiemart_common::Source;

    #[test]
    fn test_format_product_line() {
        let product = Product {
            id: Some("1".into()),
            name: Some("Mie Goreng".into()),
            prices: Some(5000.0),
            source: Some(Source::Klikindomaret),
            link: Some("https://www.klikindomaret.com/p/1".into()),
            ..Default::default()
        };
        assert_eq!(
            format_product_line(&product),
            "Mie Goreng  Rp5.000  [Indomaret]  https://www.klikindomaret.com/p/1"
        );
    }

    #[test]
    fn test_format_product_line_defaults() {
        assert_eq!(format_product_line(&Product::default()), "  Rp0  [Alfamart]");
    }

    #[test]
    fn test_format_product_list_numbers() {
        let products = vec![Product::default(), Product::default()];
        let lines = format_product_list(&products);
        assert!(lines[0].starts_with("  1. "));
        assert!(lines[1].starts_with("  2. "));
    }
}
