//! 端末向けのカード表示

use jeju_guide_common::card::{detail_lines, summary_lines, title};
use jeju_guide_common::{Notice, Recommendation};

/// カード（一覧表示用）の文字列
pub fn format_card(rec: &Recommendation, image: &str) -> String {
    let mut out = format!("📍 {} [{}]\n", title(rec), rec.category.label());
    out.push_str(&format!("   🖼  {}\n", image));
    for line in summary_lines(rec) {
        out.push_str(&format!("   {}: {}\n", line.label, line.value));
    }
    out
}

/// 詳細表示の文字列
pub fn format_details(rec: &Recommendation) -> String {
    let mut out = format!("── {} ──\n", title(rec));
    for line in detail_lines(rec) {
        out.push_str(&format!("{}: {}\n", line.label, line.value));
    }
    out
}

pub fn print_notice(notice: Notice) {
    println!("⚠ {}", notice.message());
}
