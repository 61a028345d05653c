//! 推薦ストア
//!
//! 受理済み推薦を受理順に保持する。`(name, address)` が同じ推薦は
//! 同時に2件存在しない。永続化・容量制限なし。

use crate::types::Recommendation;

#[derive(Debug, Clone, Default)]
pub struct RecommendationStore {
    items: Vec<Recommendation>,
    last_id: u64,
}

impl RecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同じ `(name, address)` の推薦が既にあるか
    pub fn is_duplicate(&self, candidate: &Recommendation) -> bool {
        self.items
            .iter()
            .any(|r| r.dedup_key() == candidate.dedup_key())
    }

    /// 候補を末尾に追加
    ///
    /// 重複なら何もせず `false`。受理時にidが直前の受理id以下なら
    /// `直前+1` に繰り上げる。
    pub fn add(&mut self, candidate: Recommendation) -> bool {
        if self.is_duplicate(&candidate) {
            return false;
        }

        let id = candidate.id.max(self.last_id + 1);
        self.last_id = id;
        self.items.push(candidate.with_id(id));
        true
    }

    /// idが一致する推薦を削除（無ければ何もしない）
    pub fn remove(&mut self, id: u64) -> Option<Recommendation> {
        let index = self.items.iter().position(|r| r.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&Recommendation> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Recommendation] {
        &self.items
    }

    /// 最後に受理された推薦
    pub fn last(&self) -> Option<&Recommendation> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
