//! 現在天気の型とパーサー

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 現在天気
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// 摂氏
    pub temperature: f64,
    pub condition_code: u32,
    pub description: String,
}

/// 天気アイコン（2区分）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Rain,
    Sun,
}

impl WeatherIcon {
    /// 雷雨〜雨の帯（200番台〜500番台）は雨、それ以外は晴れ
    pub fn from_code(code: u32) -> Self {
        if (200..600).contains(&code) {
            WeatherIcon::Rain
        } else {
            WeatherIcon::Sun
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Sun => "☀",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "rain",
            WeatherIcon::Sun => "sun",
        }
    }
}

impl WeatherReport {
    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::from_code(self.condition_code)
    }

    /// 四捨五入した気温（例: "23°C"）
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature.round() as i64)
    }
}

#[derive(Deserialize)]
struct WeatherBody {
    main: MainBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Deserialize)]
struct ConditionBlock {
    id: u32,
    #[serde(default)]
    description: String,
}

/// 天気APIのボディをパース
///
/// `main.temp` と `weather[0].id` が必須。
pub fn parse_weather_body(body: &str) -> Result<WeatherReport> {
    let parsed: WeatherBody = serde_json::from_str(body)?;
    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| Error::Parse("weather が空です".into()))?;

    Ok(WeatherReport {
        temperature: parsed.main.temp,
        condition_code: condition.id,
        description: condition.description,
    })
}
