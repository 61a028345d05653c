use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("{0} のAPIキーが設定されていません。`jeju-guide config` または環境変数で設定してください")]
    MissingApiKey(&'static str),

    #[error("補完APIエラー: {0}")]
    Upstream(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] jeju_guide_common::Error),
}

impl GuideError {
    /// 補完の取得・パースに由来するエラーか（ユーザーには再試行を促す）
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GuideError::Upstream(_) | GuideError::Http(_) | GuideError::Common(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
