use clap::{Parser, Subcommand};
use indiemart_common::Source;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indiemart")]
#[command(about = "食料品の価格比較検索・カート共有ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品を検索して一覧表示
    Search {
        /// 検索キーワード（空文字も可）
        query: String,

        /// 販売元で絞り込み (klikindomaret/alfacart/alfagift/yogyaonline)
        #[arg(short, long, value_parser = parse_source)]
        source: Option<Source>,

        /// 生のJSONを出力
        #[arg(long)]
        json: bool,
    },

    /// 検索結果から商品を選んでカートを作り、共有URLを出力
    Pick {
        /// 検索キーワード
        query: String,

        /// 販売元で絞り込み
        #[arg(short, long, value_parser = parse_source)]
        source: Option<Source>,

        /// カートJSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カートJSONファイルから共有URLを生成
    Share {
        /// カートJSON（商品配列）
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 共有URL（またはトークン）からカートを復元
    Open {
        /// 共有URLまたはトークン
        #[arg(required = true)]
        link: String,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定
    Config {
        /// 検索APIのベースURLを設定
        #[arg(long)]
        set_api_base_url: Option<String>,

        /// 共有URLのオリジンを設定
        #[arg(long)]
        set_share_origin: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

fn parse_source(s: &str) -> Result<Source, String> {
    s.parse::<Source>().map_err(|e| e.to_string())
}
