//! 補完APIから推薦1件を取得

use super::{fetch_text, js_error, log_warn};
use crate::config::WidgetConfig;
use jeju_guide_common::{parse_completion_body, Category, CompletionRequest, Recommendation};

pub async fn fetch_recommendation(
    config: &WidgetConfig,
    category: Category,
) -> Result<Recommendation, String> {
    let request = CompletionRequest::for_category(category);
    let body = serde_json::to_string(&request).map_err(|e| e.to_string())?;

    let headers = [
        ("Content-Type", "application/json"),
        ("api-key", config.completion_api_key.as_str()),
    ];
    let resp = fetch_text("POST", &config.completion_endpoint, &headers, Some(&body))
        .await
        .map_err(js_error)?;

    if !resp.ok {
        let message = format!("補完APIエラー: status {}", resp.status);
        log_warn(&message);
        return Err(message);
    }

    let details = parse_completion_body(&resp.body).map_err(|e| {
        log_warn(&format!("補完のパースに失敗: {}", e));
        e.to_string()
    })?;

    let id = js_sys::Date::now().max(0.0) as u64;
    Ok(Recommendation::from_details(details, category, id))
}
