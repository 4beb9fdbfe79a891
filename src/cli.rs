use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geomech")]
#[command(about = "文書ファイルの棚卸し・キーワード分類ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ディレクトリを走査して棚卸しCSVを作成
    Inventory {
        /// ルートディレクトリ
        #[arg(required = true)]
        root: PathBuf,

        /// ルート直下の対象フォルダ（複数指定可、省略時はルート全体）
        #[arg(short, long = "folder")]
        folders: Vec<String>,

        /// 出力CSV（デフォルト: 設定の filelist_path）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 形式別件数CSVの出力先
        #[arg(long)]
        counts: Option<PathBuf>,
    },

    /// 棚卸しのうち指定形式のファイルを分類してレポートを出力
    Classify {
        /// 形式（例: txt, .XLS）。複数指定・カンマ区切り可
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        formats: Vec<String>,

        /// 先頭から処理する件数（0は無制限、ドライラン用）
        #[arg(short = 'n', long, default_value = "0")]
        limit: usize,

        /// 棚卸しCSV
        #[arg(long)]
        filelist: Option<PathBuf>,

        /// キーワードファイル（xlsx/xls/ods/csv）
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// キーワードファイルのヘッダー前の読み飛ばし行数
        #[arg(long)]
        skip_rows: Option<usize>,

        /// レポート出力先
        #[arg(short, long)]
        reports_dir: Option<PathBuf>,

        /// 並列数（1で逐次）
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// 単一ファイルを分類して結果をJSONで表示
    Check {
        /// 対象ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// キーワードファイル
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// キーワードファイルのヘッダー前の読み飛ばし行数
        #[arg(long)]
        skip_rows: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// 棚卸しCSVを設定
        #[arg(long)]
        set_filelist: Option<PathBuf>,

        /// キーワードファイルを設定
        #[arg(long)]
        set_keywords: Option<PathBuf>,

        /// レポート出力先を設定
        #[arg(long)]
        set_reports_dir: Option<PathBuf>,

        /// 並列数を設定（0でCPU数）
        #[arg(long)]
        set_jobs: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
