use clap::{Parser, Subcommand};
use jeju_guide_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jeju-guide")]
#[command(about = "제주 여행 추천 챗봇", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話式で推薦を集める
    Chat,

    /// カテゴリの推薦を取得して表示
    Recommend {
        /// カテゴリ (food/cafe/beach/sightseeing/photo-spot)
        #[arg(required = true)]
        category: Category,

        /// 取得回数（重複は捨てる）
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 現在の天気を表示
    Weather {
        /// 地名（省略時は設定値）
        #[arg(short, long)]
        location: Option<String>,
    },

    /// 場所名の画像パスを表示
    Image {
        /// 場所名
        #[arg(required = true)]
        name: String,

        /// 画像対応表（省略時は設定値）
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 補完APIキーを設定
        #[arg(long)]
        set_completion_key: Option<String>,

        /// 天気APIキーを設定
        #[arg(long)]
        set_weather_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
