//! # Roster Repository Trait
//!
//! 名簿の取得を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::student::Student;

/// 名簿リポジトリ
///
/// ホームボードの生徒一覧を取得するリモート呼び出し
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// 生徒一覧を取得する
    ///
    /// # Returns
    ///
    /// サーバーが返した順序のままの生徒リスト
    ///
    /// # Errors
    ///
    /// リクエストまたはレスポンスの解析に失敗した場合にエラーを返す
    async fn fetch_students(&self) -> Result<Vec<Student>>;
}
