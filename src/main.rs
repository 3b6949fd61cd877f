use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use indiemart::{cli, client, config, error, logging, output, picker, share};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indiemart_common::{Product, Source};
use std::time::Duration;
use tracing::{debug, info};

/// スピナーを出しながら検索する
async fn search_with_spinner(config: &Config, query: &str, source: Option<Source>) -> Result<Vec<Product>> {
    let http = client::HttpClient::new(config.api_base_url())?;
    debug!(base_url = http.base_url(), query, ?source, "search");

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = client::run_search(&http, config.ordering, query, source).await;
    spinner.finish_and_clear();
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, source, json } => {
            let products = search_with_spinner(&config, &query, source).await?;
            info!(count = products.len(), "search finished");

            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else if products.is_empty() {
                println!("Barang tidak ditemukan.");
            } else {
                for line in output::format_product_list(&products) {
                    println!("{}", line);
                }
            }
        }

        Commands::Pick { query, source, output: save_path } => {
            let products = search_with_spinner(&config, &query, source).await?;
            if products.is_empty() {
                println!("Barang tidak ditemukan.");
                return Ok(());
            }

            let cart = picker::run_picker(&products)?;
            if cart.is_empty() {
                return Err(error::IndieMartError::EmptyCart);
            }

            if let Some(path) = save_path {
                share::write_cart_file(&path, &cart)?;
                println!("✔ カートを保存: {}", path.display());
            }
            println!("{}", share::cart_to_url(&config, &cart)?);
        }

        Commands::Share { input } => {
            let cart = share::read_cart_file(&input)?;
            debug!(items = cart.len(), "cart loaded");
            println!("{}", share::cart_to_url(&config, &cart)?);
        }

        Commands::Open { link, output: save_path } => {
            let cart = share::link_to_cart(&config, &link)?;

            match save_path {
                Some(path) => {
                    share::write_cart_file(&path, &cart)?;
                    println!("✔ {}件のカートを保存: {}", cart.len(), path.display());
                }
                None => {
                    for line in output::format_product_list(cart.items()) {
                        println!("{}", line);
                    }
                }
            }
        }

        Commands::Config { set_api_base_url, set_share_origin, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_api_base_url {
                config.set_api_base_url(url)?;
                changed = true;
                println!("✔ 検索APIのURLを設定しました");
            }

            if let Some(origin) = set_share_origin {
                config.set_share_origin(origin)?;
                changed = true;
                println!("✔ 共有URLのオリジンを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  検索API: {}", config.api_base_url());
                println!("  共有オリジン: {}", config.share_origin);
                println!("  ベースパス: {}", config.base_path);
                println!("  レスポンス順序: {:?}", config.ordering);
            }
        }
    }

    Ok(())
}
