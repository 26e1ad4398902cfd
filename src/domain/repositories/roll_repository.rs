//! # Roll Repository Trait
//!
//! ロールの保存と履歴の取得を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::activity::Activity;
use crate::domain::entities::roll::RollInput;

/// ロールリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RollRepository: Send + Sync {
    /// ロールを保存する
    ///
    /// # Arguments
    ///
    /// * `input` - セッション全体のスナップショット
    ///
    /// # Errors
    ///
    /// 保存リクエストに失敗した場合にエラーを返す
    async fn save_roll(&self, input: &RollInput) -> Result<()>;

    /// 保存済みロールの履歴を取得する
    async fn fetch_activities(&self) -> Result<Vec<Activity>>;
}
