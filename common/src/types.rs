//! 推薦データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Category: ユーザーが選ぶ5つのカテゴリ
//! - PlaceDetails: 補完APIが返す場所情報（id/categoryなし）
//! - Recommendation: ストアに受理された推薦

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 推薦カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Food,
    Cafe,
    Beach,
    Sightseeing,
    PhotoSpot,
}

impl Category {
    /// UIの表示順
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Cafe,
        Category::Beach,
        Category::Sightseeing,
        Category::PhotoSpot,
    ];

    /// CLI・JSONで使う識別子
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Cafe => "cafe",
            Category::Beach => "beach",
            Category::Sightseeing => "sightseeing",
            Category::PhotoSpot => "photo-spot",
        }
    }

    /// プロンプトと画面に出す韓国語ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "맛집",
            Category::Cafe => "카페",
            Category::Beach => "해변",
            Category::Sightseeing => "관광지",
            Category::PhotoSpot => "포토스팟",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == key || c.label() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown category: {}. Use food, cafe, beach, sightseeing, or photo-spot",
                    s
                )
            })
    }
}

/// 補完APIの返答から取り出した場所情報
///
/// 任意項目は空文字で保持し、表示時に「情報なし」へ置き換える。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceDetails {
    pub name: String,
    pub address: String,
    pub reviews: String,
    pub hours: String,
    pub entry_fee: String,
    pub parking: String,
    pub contact: String,
    pub website: String,
    pub tips: String,
}

/// ストアに受理された推薦
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// 受理時刻（Unixミリ秒）。ストア内で単調増加
    pub id: u64,
    pub category: Category,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub reviews: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub entry_fee: String,
    #[serde(default)]
    pub parking: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub tips: String,
}

impl Recommendation {
    /// 場所情報にカテゴリとidを付与して推薦を作る
    pub fn from_details(details: PlaceDetails, category: Category, id: u64) -> Self {
        Self {
            id,
            category,
            name: details.name,
            address: details.address,
            reviews: details.reviews,
            hours: details.hours,
            entry_fee: details.entry_fee,
            parking: details.parking,
            contact: details.contact,
            website: details.website,
            tips: details.tips,
        }
    }

    /// 重複判定キー
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.name, &self.address)
    }

    /// idだけ差し替えたコピー
    pub(crate) fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.slug().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!("포토스팟".parse::<Category>().unwrap(), Category::PhotoSpot);
        assert_eq!("맛집".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("photo_spot".parse::<Category>().unwrap(), Category::PhotoSpot);
    }

    #[test]
    fn test_category_unknown() {
        let err = "museum".parse::<Category>().unwrap_err();
        assert!(err.contains("museum"));
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&Category::PhotoSpot).unwrap();
        assert_eq!(json, "\"photo-spot\"");
    }

    #[test]
    fn test_recommendation_serialize_camel_case() {
        let details = PlaceDetails {
            name: "성산일출봉".to_string(),
            address: "서귀포시 성산읍".to_string(),
            entry_fee: "5,000원".to_string(),
            ..Default::default()
        };
        let rec = Recommendation::from_details(details, Category::Sightseeing, 42);

        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"entryFee\":\"5,000원\""));
        assert!(json.contains("\"category\":\"sightseeing\""));
        assert!(json.contains("\"id\":42"));
    }

    #[test]
    fn test_dedup_key() {
        let details = PlaceDetails {
            name: "Foo".to_string(),
            address: "123 St".to_string(),
            ..Default::default()
        };
        let rec = Recommendation::from_details(details, Category::Food, 1);
        assert_eq!(rec.dedup_key(), ("Foo", "123 St"));
    }
}
