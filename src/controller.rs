//! カテゴリ選択コントローラ
//!
//! カテゴリ選択を推薦取得に変換し、結果をストアに反映する。
//! 取得中は次の取得を送らない（`FetchOutcome::Busy`）。

use crate::completion::RecommendationSource;
use jeju_guide_common::{
    settle, Category, FetchOutcome, Recommendation, RecommendationStore, SelectionState,
};
use tracing::{debug, info};

pub struct CategorySelectionController<S> {
    source: S,
    store: RecommendationStore,
    state: SelectionState,
}

impl<S: RecommendationSource> CategorySelectionController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: RecommendationStore::new(),
            state: SelectionState::new(),
        }
    }

    /// カテゴリを選択して1件取得
    pub async fn select_category(&mut self, category: Category) -> FetchOutcome {
        if !self.state.begin(category) {
            debug!(category = %category, "取得中のため選択を無視");
            return FetchOutcome::Busy;
        }

        let fetched = self.source.fetch_one(category).await;
        let outcome = settle(&mut self.store, fetched);
        self.state.finish();

        match outcome {
            FetchOutcome::Added(id) => info!(category = %category, id, "推薦を追加"),
            FetchOutcome::Duplicate => info!(category = %category, "重複した推薦を破棄"),
            _ => {}
        }
        outcome
    }

    /// 直前のカテゴリでもう1件取得
    pub async fn add_more(&mut self) -> FetchOutcome {
        match self.state.last() {
            Some(category) => self.select_category(category).await,
            None => FetchOutcome::NothingToRepeat,
        }
    }

    /// 推薦を削除
    pub fn remove(&mut self, id: u64) -> Option<Recommendation> {
        self.store.remove(id)
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        self.store.as_slice()
    }

    pub fn get(&self, id: u64) -> Option<&Recommendation> {
        self.store.get(id)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn last_category(&self) -> Option<Category> {
        self.state.last()
    }
}
