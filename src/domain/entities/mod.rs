//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Student**: 名簿上の生徒
//! - **RollEntry / RollInput**: 出欠マークと保存ペイロード
//! - **Activity**: 保存済みロールの履歴

pub mod activity;
pub mod roll;
pub mod student;
