//! 画像対応表の読み込み

use super::{fetch_text, js_error, log_warn};
use jeju_guide_common::ImageLookupTable;

/// 読めなければ空の表（全て既定画像）
pub async fn fetch_table(url: &str) -> ImageLookupTable {
    let resp = match fetch_text("GET", url, &[], None).await {
        Ok(resp) if resp.ok => resp,
        Ok(resp) => {
            log_warn(&format!("画像対応表を取得できません: status {}", resp.status));
            return ImageLookupTable::empty();
        }
        Err(e) => {
            log_warn(&format!("画像対応表を取得できません: {}", js_error(e)));
            return ImageLookupTable::empty();
        }
    };

    ImageLookupTable::parse(&resp.body).unwrap_or_else(|e| {
        log_warn(&format!("画像対応表のパースに失敗: {}", e));
        ImageLookupTable::empty()
    })
}
