//! カテゴリ選択の状態遷移
//!
//! CLIとWeb(WASM)のコントローラが共有する、I/Oを含まない部分:
//! - SelectionState: 取得中カテゴリ・直前カテゴリ・取得中フラグ
//! - settle: 取得結果をストアに反映して FetchOutcome を返す
//! - Notice: ユーザーに見せる通知

use crate::store::RecommendationStore;
use crate::types::{Category, Recommendation};

/// ユーザー向け通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    UpstreamFailure,
    Duplicate,
    GeolocationDenied,
    GeolocationUnsupported,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::UpstreamFailure => "추천을 가져오는 데 문제가 발생했습니다. 다시 시도해 주세요.",
            Notice::Duplicate => "중복된 추천이 있습니다. 다시 시도해 주세요.",
            Notice::GeolocationDenied => "위치 정보를 가져올 수 없습니다. 권한을 확인해주세요.",
            Notice::GeolocationUnsupported => "이 브라우저에서는 위치 정보를 지원하지 않습니다.",
        }
    }
}

/// 1回の選択操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// ストアに追加された（受理id）
    Added(u64),
    /// 既存の推薦と重複
    Duplicate,
    /// 補完の取得・パースに失敗
    Failed,
    /// 別の取得が進行中のため送らなかった
    Busy,
    /// 「もっと見る」だが直前カテゴリが無い
    NothingToRepeat,
}

impl FetchOutcome {
    /// 表示すべき通知
    pub fn notice(&self) -> Option<Notice> {
        match self {
            FetchOutcome::Duplicate => Some(Notice::Duplicate),
            FetchOutcome::Failed => Some(Notice::UpstreamFailure),
            FetchOutcome::Added(_) | FetchOutcome::Busy | FetchOutcome::NothingToRepeat => None,
        }
    }
}

/// 選択状態（プロセス内のみ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<Category>,
    last: Option<Category>,
    loading: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得開始
    ///
    /// 取得中なら状態を変えずに `false`。
    pub fn begin(&mut self, category: Category) -> bool {
        if self.loading {
            return false;
        }
        self.current = Some(category);
        self.last = Some(category);
        self.loading = true;
        true
    }

    /// 取得終了（成功・重複・失敗のいずれでも呼ぶ）
    pub fn finish(&mut self) {
        self.loading = false;
        self.current = None;
    }

    /// 取得中のカテゴリ（ボタン強調用）
    pub fn current(&self) -> Option<Category> {
        self.current
    }

    /// 「もっと見る」の対象
    pub fn last(&self) -> Option<Category> {
        self.last
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.current == Some(category)
    }
}

/// 取得結果をストアに反映
///
/// 失敗時・重複時はストアを変更しない。
pub fn settle<E>(
    store: &mut RecommendationStore,
    fetched: Result<Recommendation, E>,
) -> FetchOutcome {
    match fetched {
        Ok(candidate) => {
            if store.add(candidate) {
                store
                    .last()
                    .map(|r| FetchOutcome::Added(r.id))
                    .unwrap_or(FetchOutcome::Failed)
            } else {
                FetchOutcome::Duplicate
            }
        }
        Err(_) => FetchOutcome::Failed,
    }
}
