//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SessionController**: ロールの開始・マーク・キャンセル・保存
//! - **LoadActivityUseCase**: 保存済みロールの履歴取得

pub mod load_activity;
pub mod session_controller;

pub use load_activity::{ActivitySummary, LoadActivityUseCase};
pub use session_controller::{SaveHandle, SessionController};
