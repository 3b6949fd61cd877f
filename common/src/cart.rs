//! カートと表示切替
//!
//! 一覧で右スワイプ → カートに追加、カート表示で左スワイプ → カートから削除。

use crate::types::Product;
use serde::{Deserialize, Serialize};

/// 表示中のビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// 検索結果（カート投入済みを除く）
    #[default]
    List,
    /// カートの中身
    Cart,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::List => View::Cart,
            View::Cart => View::List,
        }
    }
}

/// スワイプ方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// 水平移動量から方向を判定する（しきい値未満は `None`）
    pub fn from_delta(dx: f64, threshold: f64) -> Option<Self> {
        if dx >= threshold {
            Some(SwipeDirection::Right)
        } else if dx <= -threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }
}

/// スワイプの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    Removed,
    Unchanged,
}

/// カート
///
/// JSON上は商品配列そのもの。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.items.iter().any(|p| p.same_item(product))
    }

    /// 未投入なら追加する。追加したら `true`
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// 同じ商品をすべて取り除く。取り除いたら `true`
    pub fn remove(&mut self, product: &Product) -> bool {
        let before = self.items.len();
        self.items.retain(|p| !p.same_item(product));
        self.items.len() != before
    }

    /// 検索結果からカート投入済みの商品を除いたもの
    pub fn available<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| !self.contains(p)).collect()
    }

    /// ビューとスワイプ方向に応じてカートを更新する
    pub fn apply_swipe(&mut self, view: View, direction: SwipeDirection, product: &Product) -> CartChange {
        match (view, direction) {
            (View::List, SwipeDirection::Right) => {
                if self.add(product.clone()) {
                    CartChange::Added
                } else {
                    CartChange::Unchanged
                }
            }
            (View::Cart, SwipeDirection::Left) => {
                if self.remove(product) {
                    CartChange::Removed
                } else {
                    CartChange::Unchanged
                }
            }
            _ => CartChange::Unchanged,
        }
    }
}
