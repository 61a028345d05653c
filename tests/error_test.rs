//! エラーケーステスト
//!
//! 設定不備や上流の失敗でのエラーハンドリングを検証

use jeju_guide::completion::RecommendationClient;
use jeju_guide::config::Config;
use jeju_guide::error::GuideError;
use jeju_guide_common::ImageLookupTable;

/// APIキー未設定ではクライアントを作れない
#[test]
fn test_client_requires_completion_key() {
    let config = Config::default();
    let result = RecommendationClient::from_config(reqwest::Client::new(), &config);
    assert!(matches!(result, Err(GuideError::MissingApiKey(_))));
}

/// 環境変数のキーで作れる
#[test]
fn test_client_with_env_key() {
    let config = Config::default().with_env_overrides(|key| {
        (key == jeju_guide::config::COMPLETION_KEY_ENV).then(|| "secret".to_string())
    });
    assert!(RecommendationClient::from_config(reqwest::Client::new(), &config).is_ok());
}

/// 共通ライブラリのエラーはそのまま表示される
#[test]
fn test_common_error_is_transparent() {
    let inner = ImageLookupTable::parse("title\timage\nFoo\tfoo.jpg\n").unwrap_err();
    let message = inner.to_string();
    let err: GuideError = inner.into();
    assert_eq!(err.to_string(), message);
}

/// GuideErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GuideError::Config("テスト設定エラー".to_string()),
        GuideError::MissingApiKey("補完API"),
        GuideError::Upstream("status 500".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

/// 上流由来かどうかの判定
#[test]
fn test_is_upstream() {
    assert!(GuideError::Upstream("x".into()).is_upstream());
    assert!(!GuideError::Config("x".into()).is_upstream());
    assert!(!GuideError::MissingApiKey("補完API").is_upstream());
}

/// 壊れた設定ファイルはJSONエラー
#[test]
fn test_broken_config_json() {
    let result: Result<Config, _> = serde_json::from_str("{ broken");
    let err: GuideError = result.unwrap_err().into();
    assert!(matches!(err, GuideError::JsonParse(_)));
}
