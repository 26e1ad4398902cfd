//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **aggregation**: 出欠の集計・絞り込み・並び替え

pub mod aggregation;
