//! 天気取得（失敗時は None）

use super::{fetch_text, js_error, log_warn};
use crate::config::WidgetConfig;
use jeju_guide_common::{parse_weather_body, WeatherReport};

pub async fn fetch_current(config: &WidgetConfig) -> Option<WeatherReport> {
    let api_key = config.weather_api_key.as_deref()?;
    let url = format!(
        "{}?q={}&appid={}&units=metric",
        config.weather_endpoint,
        String::from(js_sys::encode_uri_component(&config.weather_location)),
        String::from(js_sys::encode_uri_component(api_key)),
    );

    let resp = match fetch_text("GET", &url, &[], None).await {
        Ok(resp) => resp,
        Err(e) => {
            log_warn(&format!("天気の取得に失敗: {}", js_error(e)));
            return None;
        }
    };
    if !resp.ok {
        log_warn(&format!("天気APIエラー: status {}", resp.status));
        return None;
    }

    match parse_weather_body(&resp.body) {
        Ok(report) => Some(report),
        Err(e) => {
            log_warn(&format!("天気レスポンスのパースに失敗: {}", e));
            None
        }
    }
}
