//! IndieMart CLI
//!
//! ブラウザ版と同じ検索API・共有トークンを端末から扱う。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod picker;
pub mod share;
