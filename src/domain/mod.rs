//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - フレームワークに依存しない
//! - HTTPやUIについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Student, RollEntryなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（集計ルール）
//! - **error**: ロール操作のエラー

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
