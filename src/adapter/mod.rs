//! Adapter Layer
//!
//! 外部システム（ロールコールAPI, 設定ファイル）との統合

pub mod api;
pub mod config;
pub mod repositories;
