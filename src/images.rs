//! 場所画像リゾルバ
//!
//! 対応表は最初の解決時に一度だけ読み込む。読み込みに失敗した場合は
//! 空の表として扱い、全ての名前がフォールバック画像に解決される。

use jeju_guide_common::ImageLookupTable;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

pub struct PlaceImageResolver {
    http: reqwest::Client,
    source: String,
    table: OnceCell<ImageLookupTable>,
}

impl PlaceImageResolver {
    /// `source` はローカルパスまたは http(s) URL
    pub fn new(http: reqwest::Client, source: impl Into<String>) -> Self {
        Self {
            http,
            source: source.into(),
            table: OnceCell::new(),
        }
    }

    /// 読み込み済みの表で初期化（テスト・埋め込み用）
    pub fn with_table(table: ImageLookupTable) -> Self {
        Self {
            http: reqwest::Client::new(),
            source: String::new(),
            table: OnceCell::new_with(Some(table)),
        }
    }

    /// 場所名を画像パスに解決
    pub async fn resolve(&self, name: &str) -> String {
        self.table().await.resolve(name).to_string()
    }

    /// 対応表（初回のみ読み込み）
    pub async fn table(&self) -> &ImageLookupTable {
        self.table
            .get_or_init(|| async {
                match self.load().await {
                    Ok(table) => {
                        debug!(source = %self.source, entries = table.len(), "画像対応表を読み込みました");
                        table
                    }
                    Err(e) => {
                        warn!(source = %self.source, error = %e, "画像対応表を読み込めません。既定画像を使用します");
                        ImageLookupTable::empty()
                    }
                }
            })
            .await
    }

    async fn load(&self) -> crate::error::Result<ImageLookupTable> {
        let text = if self.source.starts_with("http://") || self.source.starts_with("https://") {
            self.http
                .get(&self.source)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?
        } else {
            tokio::fs::read_to_string(&self.source).await?
        };
        Ok(ImageLookupTable::parse(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeju_guide_common::FALLBACK_IMAGE;
    use std::io::Write;

    #[tokio::test]
    async fn test_resolve_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name\tpicture\n자매국수\tjamae.jpg\n").unwrap();

        let resolver = PlaceImageResolver::new(reqwest::Client::new(), file.path().display().to_string());
        assert_eq!(resolver.resolve("자매국수").await, "/images/jamae.jpg");
        assert_eq!(resolver.resolve("없는 곳").await, FALLBACK_IMAGE);
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let resolver = PlaceImageResolver::new(reqwest::Client::new(), "/nonexistent/jeju_list.tsv");
        assert_eq!(resolver.resolve("자매국수").await, FALLBACK_IMAGE);
        assert!(resolver.table().await.is_empty());
    }

    #[tokio::test]
    async fn test_loaded_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name\tpicture\nFoo\tfoo.jpg\n").unwrap();
        let resolver = PlaceImageResolver::new(reqwest::Client::new(), file.path().display().to_string());
        assert_eq!(resolver.resolve("Foo").await, "/images/foo.jpg");

        // 読み込み後のファイル変更は反映されない
        std::fs::write(file.path(), "name\tpicture\nFoo\tchanged.jpg\n").unwrap();
        assert_eq!(resolver.resolve("Foo").await, "/images/foo.jpg");
    }

    #[tokio::test]
    async fn test_with_table() {
        let table = jeju_guide_common::ImageLookupTable::parse("name\tpicture\nBar\tbar.jpg\n").unwrap();
        let resolver = PlaceImageResolver::with_table(table);
        assert_eq!(resolver.resolve("Bar").await, "/images/bar.jpg");
    }
}
