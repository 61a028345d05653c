//! 補完API連携モジュール
//!
//! カテゴリ1件分のプロンプトを補完エンドポイントへ送り、
//! 返答を推薦1件にパースする。パース処理は共通モジュールを使用

use crate::config::Config;
use crate::error::{GuideError, Result};
use async_trait::async_trait;
use jeju_guide_common::{parse_completion_body, Category, CompletionRequest, Recommendation};
use tracing::{debug, warn};

/// 補完リクエストを送ってレスポンスボディを返す
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// 推薦1件を取得する（コントローラから見た境界）
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_one(&self, category: Category) -> Result<Recommendation>;
}

/// HTTPS POST による補完トランスポート
pub struct HttpCompletionTransport {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpCompletionTransport {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self> {
        let api_key = config.completion_api_key()?;
        Ok(Self::new(http, config.completion_endpoint.clone(), api_key))
    }
}

#[async_trait]
impl CompletionTransport for HttpCompletionTransport {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GuideError::Upstream(format!("status {}: {}", status, body)));
        }
        Ok(body)
    }
}

/// 推薦クライアント
pub struct RecommendationClient<T> {
    transport: T,
}

impl<T: CompletionTransport> RecommendationClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl RecommendationClient<HttpCompletionTransport> {
    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self> {
        Ok(Self::new(HttpCompletionTransport::from_config(http, config)?))
    }
}

#[async_trait]
impl<T: CompletionTransport> RecommendationSource for RecommendationClient<T> {
    async fn fetch_one(&self, category: Category) -> Result<Recommendation> {
        let request = CompletionRequest::for_category(category);
        debug!(category = %category, "補完リクエスト送信");

        let body = self.transport.complete(&request).await.map_err(|e| {
            warn!(category = %category, error = %e, "補完の取得に失敗");
            e
        })?;

        let details = parse_completion_body(&body).map_err(|e| {
            warn!(category = %category, error = %e, "補完のパースに失敗");
            GuideError::Upstream(e.to_string())
        })?;

        let id = chrono::Utc::now().timestamp_millis().max(0) as u64;
        debug!(category = %category, name = %details.name, id, "推薦を取得");
        Ok(Recommendation::from_details(details, category, id))
    }
}
