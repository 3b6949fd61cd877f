//! IndieMart Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod source;
pub mod error;
pub mod async_data;
pub mod currency;
pub mod debounce;
pub mod cart;
pub mod share;
pub mod search;
pub mod config;
pub mod state;

pub use types::{Product, PLACEHOLDER_IMAGE};
pub use source::Source;
pub use error::{Error, Result, SearchError};
pub use async_data::AsyncData;
pub use currency::format_idr;
pub use debounce::Debouncer;
pub use cart::{Cart, CartChange, SwipeDirection, View};
pub use search::{decode_products, search_url, ProductSearch, ResponseOrdering, SearchParams};
pub use config::AppConfig;
pub use state::{HomeState, SearchData, SearchTicket};
