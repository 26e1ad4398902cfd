//! # Load Activity Use Case
//!
//! 保存済みロールの履歴を取得し、1件ごとの集計を付与する

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::application::dto::load_state::LoadState;
use crate::domain::entities::activity::Activity;
use crate::domain::repositories::roll_repository::RollRepository;
use crate::domain::services::aggregation::{Aggregator, RollCounts};

/// 履歴1件の表示用サマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySummary {
    pub id: u64,
    pub name: String,
    pub completed_at: DateTime<Utc>,
    /// `all` は記録されたエントリ数
    pub counts: RollCounts,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        let record = &activity.entity;
        Self {
            id: record.id,
            name: record.name.clone(),
            completed_at: record.completed_at,
            counts: Aggregator::count_entries(&record.student_roll_states),
        }
    }
}

/// 履歴取得ユースケース
pub struct LoadActivityUseCase<S: RollRepository> {
    roll_repository: Arc<S>,
}

impl<S: RollRepository> LoadActivityUseCase<S> {
    pub fn new(roll_repository: Arc<S>) -> Self {
        Self { roll_repository }
    }

    /// 履歴を取得する
    ///
    /// 失敗時は `LoadState::Error` を返し、部分的なデータは返さない
    pub async fn execute(&self) -> LoadState<Vec<ActivitySummary>> {
        let state: LoadState<Vec<ActivitySummary>> = LoadState::from_result(
            self.roll_repository
                .fetch_activities()
                .await
                .map(|activities| activities.iter().map(ActivitySummary::from).collect()),
        );

        match &state {
            LoadState::Loaded(summaries) => info!("Loaded {} activities", summaries.len()),
            LoadState::Error(message) => warn!("Failed to load activities: {}", message),
            _ => {}
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::domain::entities::activity::RollRecord;
    use crate::domain::entities::roll::{RollEntry, RollState};
    use crate::domain::repositories::roll_repository::MockRollRepository;

    fn create_test_activity(id: u64, states: &[RollState]) -> Activity {
        let completed_at = Utc.with_ymd_and_hms(2021, 3, 1, 9, 0, 0).unwrap();
        Activity {
            activity_type: "roll".to_string(),
            date: Some(completed_at),
            entity: RollRecord {
                id,
                name: format!("Roll {}", id),
                completed_at,
                student_roll_states: states
                    .iter()
                    .enumerate()
                    .map(|(i, state)| RollEntry::new(i as u64 + 1, *state))
                    .collect(),
            },
        }
    }

    #[tokio::test]
    async fn test_execute_counts_each_record() {
        let mut repo = MockRollRepository::new();
        repo.expect_fetch_activities().times(1).returning(|| {
            Ok(vec![
                create_test_activity(
                    1,
                    &[RollState::Present, RollState::Late, RollState::Present],
                ),
                create_test_activity(2, &[]),
            ])
        });
        let use_case = LoadActivityUseCase::new(Arc::new(repo));

        let state = use_case.execute().await;

        let summaries = state.loaded().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[0].counts,
            RollCounts {
                all: 3,
                present: 2,
                late: 1,
                absent: 0
            }
        );
        assert_eq!(summaries[1].name, "Roll 2");
        assert_eq!(summaries[1].counts, RollCounts::default());
    }

    #[tokio::test]
    async fn test_execute_failure() {
        let mut repo = MockRollRepository::new();
        repo.expect_fetch_activities()
            .returning(|| Err(anyhow::anyhow!("connection refused")));
        let use_case = LoadActivityUseCase::new(Arc::new(repo));

        let state = use_case.execute().await;

        assert_eq!(state, LoadState::Error("connection refused".to_string()));
    }
}
