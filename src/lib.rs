//! # Rollcall
//!
//! 教室のロールコール（出欠確認）クライアント
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 生徒・出欠マーク・集計ルール（外部依存なし）
//! - **Application層**: 名簿/ロールセッションのストアとセッションコントローラー
//! - **Adapter層**: 外部システムとの統合（HTTP API, 設定ファイル）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
