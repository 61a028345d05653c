//! 推薦カードの表示項目
//!
//! 空の項目は「情報なし」の文言に置き換える。

use crate::types::Recommendation;

/// カードに出す1行（ラベル, 値）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn line(label: &'static str, value: &str, placeholder: &str) -> CardLine {
    CardLine {
        label,
        value: or_placeholder(value, placeholder),
    }
}

/// カード見出し
pub fn title(rec: &Recommendation) -> String {
    or_placeholder(&rec.name, "이름 없음")
}

/// カード本体の要約（住所・レビュー・連絡先）
pub fn summary_lines(rec: &Recommendation) -> Vec<CardLine> {
    vec![
        line("주소", &rec.address, "주소 정보 없음"),
        line("리뷰", &rec.reviews, "리뷰 정보 없음"),
        line("연락처", &rec.contact, "연락처 정보 없음"),
    ]
}

/// 詳細モーダルの全項目
///
/// ウェブサイトは値があるときだけ含める。
pub fn detail_lines(rec: &Recommendation) -> Vec<CardLine> {
    let mut lines = vec![
        line("주소", &rec.address, "주소 정보 없음"),
        line("리뷰", &rec.reviews, "리뷰 정보 없음"),
        line("운영 시간", &rec.hours, "운영 시간 정보 없음"),
        line("입장료", &rec.entry_fee, "입장료 정보 없음"),
        line("주차 정보", &rec.parking, "주차 정보 없음"),
        line("연락처", &rec.contact, "연락처 정보 없음"),
    ];
    if !rec.website.trim().is_empty() {
        lines.push(CardLine {
            label: "웹사이트",
            value: rec.website.clone(),
        });
    }
    lines.push(line("특별한 팁", &rec.tips, "특별한 팁 정보 없음"));
    lines
}
