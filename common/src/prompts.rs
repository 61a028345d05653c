//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有される補完リクエスト生成ロジック:
//! - RECOMMENDATION_FIELDS: 返答JSONに要求する項目
//! - build_recommendation_prompt: カテゴリ別のシステムプロンプト
//! - CompletionRequest: 補完エンドポイントへ送るボディ

use crate::types::Category;
use serde::Serialize;

/// 返答JSONに要求する項目（順序はプロンプトの例示順）
pub const RECOMMENDATION_FIELDS: &[(&str, &str)] = &[
    ("name", "장소이름"),
    ("address", "주소"),
    ("reviews", "리뷰내용"),
    ("hours", "운영시간"),
    ("entryFee", "입장료"),
    ("parking", "주차 정보"),
    ("contact", "연락처"),
    ("website", "웹사이트"),
    ("tips", "특별한 팁"),
];

/// サンプリング設定（固定値）
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.95;
pub const MAX_TOKENS: u32 = 500;

/// カテゴリ別プロンプト生成
///
/// 地元ガイドの役割を与え、指定カテゴリの場所を1件だけJSONで返すよう指示する。
pub fn build_recommendation_prompt(category: Category) -> String {
    let example = RECOMMENDATION_FIELDS
        .iter()
        .map(|(key, hint)| format!("\"{}\": \"{}\"", key, hint))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "제주도 현지 10대 MZ 가이드 역할, 발랄하고 맛있는 것, 재밌는 것, 놀러다니는 것을 좋아함. \
         제주도의 {label} 1곳을 추천해주세요. 응답은 JSON 형식으로 해주세요. 예시: {{{example}}}.",
        label = category.label(),
    )
}

/// 補完リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl CompletionRequest {
    /// カテゴリ1件分の単発リクエスト
    pub fn for_category(category: Category) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: build_recommendation_prompt(category),
            }],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }
}
