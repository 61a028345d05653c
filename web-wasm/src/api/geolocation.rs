//! 現在地の取得

use jeju_guide_common::{Coordinates, Notice};
use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// 非対応なら `GeolocationUnsupported`、拒否・失敗なら `GeolocationDenied`
pub async fn current_position() -> Result<Coordinates, Notice> {
    let window = web_sys::window().ok_or(Notice::GeolocationUnsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| Notice::GeolocationUnsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|_| Notice::GeolocationDenied)?;
    coordinates_of(&position).ok_or(Notice::GeolocationDenied)
}

fn coordinates_of(position: &JsValue) -> Option<Coordinates> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let latitude = Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    let longitude = Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    Some(Coordinates { latitude, longitude })
}
