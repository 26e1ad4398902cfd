//! # Activity Entity
//!
//! 過去に保存されたロールの記録（読み取り専用）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::roll::RollEntry;

/// 保存済みロール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollRecord {
    pub id: u64,
    pub name: String,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub student_roll_states: Vec<RollEntry>,
}

/// アクティビティ
///
/// `type` は現状 `"roll"` のみ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub entity: RollRecord,
}
