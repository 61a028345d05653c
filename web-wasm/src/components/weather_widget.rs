//! 天気ウィジェット
//!
//! 取得できなかった場合は何も表示しない。

use jeju_guide_common::WeatherReport;
use leptos::prelude::*;

#[component]
pub fn WeatherWidget(weather: ReadSignal<Option<WeatherReport>>) -> impl IntoView {
    move || {
        weather.get().map(|report| {
            let icon = report.icon();
            view! {
                <div class="weather-widget">
                    <span class=format!("weather-icon {}", icon.as_str())>{icon.emoji()}</span>
                    <span class="weather-temp">{report.temperature_label()}</span>
                    <span class="weather-desc">{report.description.clone()}</span>
                </div>
            }
        })
    }
}
