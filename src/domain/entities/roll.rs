//! # Roll Entities
//!
//! 出欠マーク、ロールエントリ、保存用のロール入力

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::student::StudentId;
use crate::domain::error::RollError;

/// 出欠マーク
///
/// 永続化される値は `present` / `late` / `absent` の3つのみ。
/// 未マークの状態はセッション内にエントリが存在しないことで表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollState {
    Present,
    Late,
    Absent,
}

impl RollState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollState::Present => "present",
            RollState::Late => "late",
            RollState::Absent => "absent",
        }
    }
}

impl fmt::Display for RollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollState {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(RollState::Present),
            "late" => Ok(RollState::Late),
            "absent" => Ok(RollState::Absent),
            other => Err(RollError::InvalidRollState(other.to_string())),
        }
    }
}

/// マークによる絞り込み条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkFilter {
    All,
    Only(RollState),
}

impl FromStr for MarkFilter {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(MarkFilter::All);
        }
        s.parse().map(MarkFilter::Only)
    }
}

impl From<RollState> for MarkFilter {
    fn from(state: RollState) -> Self {
        MarkFilter::Only(state)
    }
}

/// ロールエントリ
///
/// 1セッション内で `student_id` ごとに高々1件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEntry {
    pub student_id: StudentId,
    pub roll_state: RollState,
}

impl RollEntry {
    pub fn new(student_id: StudentId, roll_state: RollState) -> Self {
        Self {
            student_id,
            roll_state,
        }
    }
}

/// ロール保存リクエストのペイロード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollInput {
    pub student_roll_states: Vec<RollEntry>,
}

impl RollInput {
    pub fn new(student_roll_states: Vec<RollEntry>) -> Self {
        Self {
            student_roll_states,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.student_roll_states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.student_roll_states.is_empty()
    }
}
