//! # Roll Session Store
//!
//! 進行中のロール（出欠ドキュメント）を保持する

use crate::domain::entities::roll::{RollEntry, RollInput, RollState};
use crate::domain::entities::student::StudentId;

/// ロールセッションストア
///
/// `student_id` ごとに高々1件のエントリを持つ。
/// 個別のエントリを削除する操作はなく、`reset` で全体を空にするのみ。
#[derive(Debug, Clone, Default)]
pub struct RollSessionStore {
    entries: Vec<RollEntry>,
}

impl RollSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加または上書きする
    ///
    /// 既存のエントリは位置を保ったまま `roll_state` だけを更新し、
    /// 新規のエントリは末尾に追加する
    pub fn set_mark(&mut self, student_id: StudentId, roll_state: RollState) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.student_id == student_id)
        {
            Some(entry) => entry.roll_state = roll_state,
            None => self.entries.push(RollEntry::new(student_id, roll_state)),
        }
    }

    /// セッションを空にする
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// 現在のエントリ（挿入順）
    pub fn get_all(&self) -> &[RollEntry] {
        &self.entries
    }

    /// 1件以上マークされているか
    pub fn is_dirty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// 保存用のスナップショット
    pub fn snapshot(&self) -> RollInput {
        RollInput::new(self.entries.clone())
    }
}
