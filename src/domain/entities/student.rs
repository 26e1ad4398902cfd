//! # Student Entity
//!
//! 名簿に載っている生徒のドメインエンティティ

use serde::{Deserialize, Serialize};

/// 生徒ID
pub type StudentId = u64;

/// 生徒
///
/// 名簿（Roster Store）が所有する読み取り専用の識別レコード。
/// 出欠状態はここには持たず、ロールセッション側で管理する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    /// 新しい生徒を作成
    pub fn new(id: StudentId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "first_name last_name" 形式のフルネーム
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
