use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keiba-sign")]
#[command(about = "競馬サイン一致チェック・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 出走表を読み込んでサイン一致をチェック
    Check {
        /// ローカルCSVファイルを入力に使う（シート取得をスキップ）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// シートURLを上書き
        #[arg(long)]
        url: Option<String>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (text/json/both)
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// キャッシュを使わず必ず再取得
        #[arg(long)]
        no_cache: bool,
    },

    /// 保存済みの結果JSONをレポート表示
    Export {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// シートURLを設定
        #[arg(long)]
        set_sheet_url: Option<String>,

        /// キャッシュの有効期間（分）を設定
        #[arg(long)]
        set_cache_ttl: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// シートキャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "both" => Ok(ReportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use text, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Both => write!(f, "both"),
        }
    }
}
