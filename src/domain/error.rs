//! # Domain Errors
//!
//! ロールセッション操作のエラー

use thiserror::Error;

use super::entities::student::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("roll mode is not active")]
    NotActive,

    #[error("roll mode is already active")]
    AlreadyActive,

    #[error("student {0} was not on the roster when the roll started")]
    UnknownStudent(StudentId),

    #[error("invalid roll state: {0:?} (expected present, late or absent)")]
    InvalidRollState(String),
}
