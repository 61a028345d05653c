//! APIレスポンスパーサー
//!
//! 補完エンドポイントのレスポンスから本文を取り出し、
//! 生成モデルが書いたJSONを場所情報へ変換する。
//! 本文は信頼できない自由文として扱い、失敗は必ず `Err` で返す。

use crate::error::{Error, Result};
use crate::types::PlaceDetails;
use serde::Deserialize;
use serde_json::{Map, Value};

/// 補完レスポンス
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// 補完レスポンスのボディから最初の候補の本文を取り出す
///
/// `choices[0].message.content` が無い、または空の場合はエラー。
pub fn extract_completion_text(body: &str) -> Result<String> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("補完レスポンスのパースエラー: {}", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| Error::Parse("有効な補完がありません".into()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(Error::Parse("補完の本文が空です".into()));
    }
    Ok(trimmed.to_string())
}

/// 本文を場所情報にパース
///
/// - 本文全体がJSONでなければエラー（前後の文章やコードブロックも不可）
/// - トップレベルがオブジェクトでなければエラー
/// - `name` と `address` が無い・空白のみならエラー。値はそのまま保持する
/// - 任意項目の欠落は空文字
pub fn parse_place_details(text: &str) -> Result<PlaceDetails> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| Error::Parse(format!("推薦JSONパースエラー: {}", e)))?;

    let Some(map) = value.as_object() else {
        return Err(Error::Parse("JSONオブジェクトではありません".into()));
    };

    let name = required_string(map, "name")?;
    let address = required_string(map, "address")?;

    Ok(PlaceDetails {
        name,
        address,
        reviews: get_string(map, "reviews").unwrap_or_default(),
        hours: get_string(map, "hours").unwrap_or_default(),
        entry_fee: get_string(map, "entryFee").unwrap_or_default(),
        parking: get_string(map, "parking").unwrap_or_default(),
        contact: get_string(map, "contact").unwrap_or_default(),
        website: get_string(map, "website").unwrap_or_default(),
        tips: get_string(map, "tips").unwrap_or_default(),
    })
}

/// 補完レスポンスのボディから場所情報まで一括で処理
pub fn parse_completion_body(body: &str) -> Result<PlaceDetails> {
    let text = extract_completion_text(body)?;
    parse_place_details(&text)
}

fn required_string(map: &Map<String, Value>, key: &str) -> Result<String> {
    get_string(map, key)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Error::Parse(format!("必須項目 {} がありません", key)))
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    let value = map.get(key)?;
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if value.is_null() {
        return None;
    }
    Some(value.to_string())
}
