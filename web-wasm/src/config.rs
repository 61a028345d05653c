//! ウィジェット設定
//!
//! ビルド時の環境変数から埋め込む。未設定の項目は既定値。

const DEFAULT_COMPLETION_ENDPOINT: &str = "https://a1418openai.openai.azure.com/openai/deployments/A1418openai/chat/completions?api-version=2023-03-15-preview";
const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_WEATHER_LOCATION: &str = "Jeju";
const DEFAULT_LOOKUP_URL: &str = "/jeju_list.tsv";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub completion_endpoint: String,
    pub completion_api_key: String,
    pub weather_endpoint: String,
    pub weather_api_key: Option<String>,
    pub weather_location: String,
    pub lookup_url: String,
}

impl WidgetConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JEJU_COMPLETION_ENDPOINT"),
            option_env!("AZURE_OPENAI_API_KEY"),
            option_env!("JEJU_WEATHER_ENDPOINT"),
            option_env!("OPENWEATHER_API_KEY"),
            option_env!("JEJU_WEATHER_LOCATION"),
            option_env!("JEJU_LOOKUP_URL"),
        )
    }

    fn from_values(
        completion_endpoint: Option<&str>,
        completion_api_key: Option<&str>,
        weather_endpoint: Option<&str>,
        weather_api_key: Option<&str>,
        weather_location: Option<&str>,
        lookup_url: Option<&str>,
    ) -> Self {
        let or = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            completion_endpoint: or(completion_endpoint, DEFAULT_COMPLETION_ENDPOINT),
            completion_api_key: or(completion_api_key, ""),
            weather_endpoint: or(weather_endpoint, DEFAULT_WEATHER_ENDPOINT),
            weather_api_key: weather_api_key
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            weather_location: or(weather_location, DEFAULT_WEATHER_LOCATION),
            lookup_url: or(lookup_url, DEFAULT_LOOKUP_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::from_values(None, None, None, None, None, None);
        assert!(config.completion_endpoint.contains("chat/completions"));
        assert!(config.completion_api_key.is_empty());
        assert!(config.weather_api_key.is_none());
        assert_eq!(config.weather_location, "Jeju");
        assert_eq!(config.lookup_url, "/jeju_list.tsv");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = WidgetConfig::from_values(None, Some(" key "), None, Some("  "), Some(""), None);
        assert_eq!(config.completion_api_key, "key");
        assert!(config.weather_api_key.is_none());
        assert_eq!(config.weather_location, "Jeju");
    }
}
