//! # Home Board View DTO
//!
//! 表示層に渡すスナップショット

use crate::application::dto::load_state::LoadState;
use crate::domain::entities::roll::RollState;
use crate::domain::entities::student::Student;
use crate::domain::services::aggregation::RollCounts;

/// ロールモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollMode {
    #[default]
    Inactive,
    Active,
}

/// 表示用の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub student: Student,
    /// 未マークなら `None`
    pub mark: Option<RollState>,
}

/// ホームボードの表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeBoardView {
    pub phase: LoadState<()>,
    pub roll_mode: RollMode,
    pub counts: RollCounts,
    pub students: Vec<StudentRow>,
}
