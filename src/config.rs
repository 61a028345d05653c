use crate::error::{GuideError, Result};
use jeju_guide_common::Coordinates;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const COMPLETION_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const WEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// 起動時に一度だけ組み立て、各クライアントに渡す設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub completion_endpoint: String,
    pub completion_api_key: Option<String>,
    pub weather_endpoint: String,
    pub weather_api_key: Option<String>,
    pub weather_location: String,
    /// 画像対応表（ローカルパスまたは http(s) URL）
    pub lookup_source: String,
    /// 地図の出発地 "緯度,経度"。未設定なら対話で尋ねる
    pub origin: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            completion_endpoint: "https://a1418openai.openai.azure.com/openai/deployments/A1418openai/chat/completions?api-version=2023-03-15-preview".into(),
            completion_api_key: None,
            weather_endpoint: "https://api.openweathermap.org/data/2.5/weather".into(),
            weather_api_key: None,
            weather_location: "Jeju".into(),
            lookup_source: "jeju_list.tsv".into(),
            origin: None,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    /// 設定ファイル＋環境変数から読み込み
    pub fn load() -> Result<Self> {
        let config = Self::load_file()?;
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// 設定ファイルのみ読み込み（無ければデフォルト）
    pub fn load_file() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GuideError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("jeju-guide").join("config.json"))
    }

    /// 環境変数のAPIキーを優先
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(COMPLETION_KEY_ENV) {
            self.completion_api_key = Some(key);
        }
        if let Some(key) = non_empty(WEATHER_KEY_ENV) {
            self.weather_api_key = Some(key);
        }
        self
    }

    pub fn completion_api_key(&self) -> Result<&str> {
        self.completion_api_key
            .as_deref()
            .ok_or(GuideError::MissingApiKey("補完API"))
    }

    pub fn weather_api_key(&self) -> Option<&str> {
        self.weather_api_key.as_deref()
    }

    pub fn origin(&self) -> Option<Coordinates> {
        self.origin.as_deref().and_then(Coordinates::parse)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_keys() {
        let config = Config::default().with_env_overrides(|key| match key {
            COMPLETION_KEY_ENV => Some("completion-secret".to_string()),
            WEATHER_KEY_ENV => Some("weather-secret".to_string()),
            _ => None,
        });
        assert_eq!(config.completion_api_key().unwrap(), "completion-secret");
        assert_eq!(config.weather_api_key(), Some("weather-secret"));
    }

    #[test]
    fn test_blank_env_does_not_override() {
        let mut config = Config::default();
        config.completion_api_key = Some("from-file".into());
        let config = config.with_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.completion_api_key().unwrap(), "from-file");
    }

    #[test]
    fn test_missing_completion_key() {
        let config = Config::default();
        assert!(matches!(
            config.completion_api_key(),
            Err(GuideError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"weather_location": "Seogwipo"}"#).unwrap();
        assert_eq!(config.weather_location, "Seogwipo");
        assert_eq!(config.timeout_seconds, 60);
        assert!(config.completion_endpoint.contains("chat/completions"));
    }

    #[test]
    fn test_origin_parse() {
        let mut config = Config::default();
        assert!(config.origin().is_none());
        config.origin = Some("33.4996,126.5312".into());
        assert!(config.origin().is_some());
    }
}
