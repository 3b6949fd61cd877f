//! ログ設定
//!
//! `RUST_LOG` があればそれに従い、無ければ `--verbose` で debug、通常は warn。

use tracing_subscriber::{fmt, EnvFilter};

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "indiemart=debug,indiemart_common=debug"
    } else {
        "indiemart=warn,indiemart_common=warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 二重初期化（テスト等）は無視する
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
