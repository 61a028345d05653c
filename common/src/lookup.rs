//! 場所名→画像パスの対応表
//!
//! タブ区切り・ヘッダー行ありのテーブルから `name` と `picture` 列を読み、
//! `name → /images/{picture}` の対応を作る。同じ名前は後勝ち。

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::Read;

/// 対応が無いときの画像
pub const FALLBACK_IMAGE: &str = "/images/default.jpg";

const IMAGE_PREFIX: &str = "/images/";
const NAME_COLUMN: &str = "name";
const PICTURE_COLUMN: &str = "picture";

#[derive(Debug, Clone, Default)]
pub struct ImageLookupTable {
    entries: HashMap<String, String>,
}

impl ImageLookupTable {
    /// 空の表（全て FALLBACK_IMAGE に解決される）
    pub fn empty() -> Self {
        Self::default()
    }

    /// タブ区切りテキストから読み込み
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// タブ区切りのリーダーから読み込み
    ///
    /// `name`/`picture` ヘッダーが無ければエラー。
    /// 列が欠けた行・読めない行は飛ばす。
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}') == wanted)
                .ok_or_else(|| Error::Parse(format!("{} 列がありません", wanted)))
        };
        let name_idx = column(NAME_COLUMN)?;
        let picture_idx = column(PICTURE_COLUMN)?;

        let mut entries = HashMap::new();
        for record in rdr.records() {
            let Ok(record) = record else {
                continue;
            };
            let (Some(name), Some(picture)) = (record.get(name_idx), record.get(picture_idx)) else {
                continue;
            };
            // キーは生のセル値。照合側と同じく空白を加工しない
            if name.trim().is_empty() || picture.trim().is_empty() {
                continue;
            }
            entries.insert(name.to_string(), format!("{}{}", IMAGE_PREFIX, picture));
        }

        Ok(Self { entries })
    }

    /// 場所名を画像パスに解決
    pub fn resolve(&self, name: &str) -> &str {
        self.entries
            .get(name)
            .map(String::as_str)
            .unwrap_or(FALLBACK_IMAGE)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "no\tcls\tname\taddress\tmenu\tpicture\tinsta\n\
        1\t맛집\t자매국수\t제주시 항골남길\t고기국수\tjamae.jpg\t@jamae\n\
        2\t카페\t봄날카페\t제주시 애월읍\t커피\tbomnal.jpg\t\n";

    #[test]
    fn test_resolve_known_name() {
        let table = ImageLookupTable::parse(TABLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("자매국수"), "/images/jamae.jpg");
        assert_eq!(table.resolve("봄날카페"), "/images/bomnal.jpg");
    }

    #[test]
    fn test_resolve_unknown_name_falls_back() {
        let table = ImageLookupTable::parse(TABLE).unwrap();
        assert_eq!(table.resolve("없는 곳"), FALLBACK_IMAGE);
        assert_eq!(table.resolve(""), FALLBACK_IMAGE);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let text = "name\tpicture\nFoo\tfirst.jpg\nFoo\tsecond.jpg\n";
        let table = ImageLookupTable::parse(text).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("Foo"), "/images/second.jpg");
    }

    #[test]
    fn test_missing_header_is_error() {
        let result = ImageLookupTable::parse("title\timage\nFoo\tfoo.jpg\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let text = "name\tpicture\nFoo\nBar\tbar.jpg\n\t\n";
        let table = ImageLookupTable::parse(text).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains("Bar"));
        assert!(!table.contains("Foo"));
    }

    #[test]
    fn test_empty_table() {
        let table = ImageLookupTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve("Foo"), FALLBACK_IMAGE);
    }

    #[test]
    fn test_cells_are_matched_verbatim() {
        let text = "name\tpicture\nFoo \tfoo.jpg\nBar\tbar.jpg\n";
        let table = ImageLookupTable::parse(text).unwrap();
        assert_eq!(table.resolve("Foo "), "/images/foo.jpg");
        assert_eq!(table.resolve("Foo"), FALLBACK_IMAGE);
        assert_eq!(table.resolve("Bar"), "/images/bar.jpg");
    }

    #[test]
    fn test_bom_header() {
        let text = "\u{feff}name\tpicture\nFoo\tfoo.jpg\n";
        let table = ImageLookupTable::parse(text).unwrap();
        assert_eq!(table.resolve("Foo"), "/images/foo.jpg");
    }
}
