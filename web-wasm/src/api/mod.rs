//! 外部API連携

pub mod search;

pub use search::FetchClient;
