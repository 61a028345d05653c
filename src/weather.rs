//! 天気API連携
//!
//! 表示はベストエフォート。失敗はすべて `None` に落とし、呼び出し側へ伝播させない。

use crate::config::Config;
use jeju_guide_common::{parse_weather_body, WeatherReport};
use tracing::{debug, warn};

pub struct WeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(
            http,
            config.weather_endpoint.clone(),
            config.weather_api_key().map(str::to_string),
        )
    }

    /// 現在天気を取得（失敗時は None）
    pub async fn fetch_current(&self, location: &str) -> Option<WeatherReport> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("天気APIキー未設定のため天気表示を省略");
            return None;
        };

        let response = match self
            .http
            .get(&self.endpoint)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "天気の取得に失敗");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "天気APIがエラーを返しました");
            return None;
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "天気レスポンスの読み込みに失敗");
                return None;
            }
        };

        match parse_weather_body(&body) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "天気レスポンスのパースに失敗");
                None
            }
        }
    }
}

/// 天気の1行表示（例: "🌧 23°C moderate rain"）
pub fn weather_line(report: &WeatherReport) -> String {
    format!(
        "{} {} {}",
        report.icon().emoji(),
        report.temperature_label(),
        report.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_returns_none() {
        let client = WeatherClient::new(reqwest::Client::new(), "http://127.0.0.1:9/weather", None);
        assert!(client.fetch_current("Jeju").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_returns_none() {
        let client = WeatherClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9/weather",
            Some("key".to_string()),
        );
        assert!(client.fetch_current("Jeju").await.is_none());
    }

    #[test]
    fn test_weather_line() {
        let report = WeatherReport {
            temperature: 18.2,
            condition_code: 800,
            description: "clear sky".to_string(),
        };
        assert_eq!(weather_line(&report), "☀ 18°C clear sky");
    }
}
