//! 画像対応表をURLから読み込むテスト

mod common;

use jeju_guide::images::PlaceImageResolver;
use jeju_guide_common::FALLBACK_IMAGE;
use std::sync::Arc;

const TABLE: &str = "name\tpicture\taddress\n자매국수\tjamae.jpg\t제주시\n성산일출봉\tseongsan.png\t서귀포시\n";

#[tokio::test]
async fn test_table_loaded_over_http_once() {
    let (base, server) = common::serve_times(200, TABLE, 1).await;
    let resolver = Arc::new(PlaceImageResolver::new(
        reqwest::Client::new(),
        format!("{}/jeju_list.tsv", base),
    ));

    // 並行して解決しても読み込みは1回
    let a = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.resolve("자매국수").await })
    };
    let b = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.resolve("성산일출봉").await })
    };

    assert_eq!(a.await.unwrap(), "/images/jamae.jpg");
    assert_eq!(b.await.unwrap(), "/images/seongsan.png");
    assert_eq!(resolver.resolve("없는 곳").await, FALLBACK_IMAGE);

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].request_line().starts_with("GET /jeju_list.tsv"));
}

#[tokio::test]
async fn test_http_error_falls_back() {
    let (base, _server) = common::serve_once(404, "not found").await;
    let resolver = PlaceImageResolver::new(reqwest::Client::new(), format!("{}/jeju_list.tsv", base));

    assert_eq!(resolver.resolve("자매국수").await, FALLBACK_IMAGE);
    assert!(resolver.table().await.is_empty());
}
