use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nota-fiscal")]
#[command(about = "Nota fiscal PDF extraction client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL（環境変数 API_BASE_URL・設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFをアップロードして抽出結果のJSONを表示
    Extract {
        /// 請求書PDFのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 抽出結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 抽出結果JSONをクリップボードへコピー
        #[arg(short, long)]
        copy: bool,

        /// 抽出後に保存APIへ送る
        #[arg(short, long)]
        save: bool,

        /// 保存前の確認を省略
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// 抽出結果JSONファイルを保存APIへ送る
    Save {
        /// 抽出結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// APIの稼働確認
    Health,

    /// 設定管理
    Config {
        /// API base URLを保存
        #[arg(long)]
        set_base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
