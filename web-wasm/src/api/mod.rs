//! ブラウザAPI連携
//!
//! fetch はすべて `fetch_text` を通す。ステータス判定は呼び出し側で行う。

pub mod completion;
pub mod geolocation;
pub mod lookup;
pub mod weather;

use jeju_guide_common::Notice;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch の結果
pub struct FetchResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

pub async fn fetch_text(
    method: &str,
    url: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> Result<FetchResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    for (name, value) in headers {
        request.headers().set(name, value)?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok(FetchResponse {
        status: resp.status(),
        ok: resp.ok(),
        body: text.as_string().unwrap_or_default(),
    })
}

pub fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn log_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// 通知をダイアログで表示
pub fn show_notice(notice: Notice) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(notice.message());
    }
}

/// 新しいタブで開く
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log_warn(&format!("タブを開けません: {}", js_error(e)));
        }
    }
}
