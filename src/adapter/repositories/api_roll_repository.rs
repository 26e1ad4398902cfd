//! API Roll Repository Implementation
//!
//! RollRepositoryのHTTP実装

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::api::ApiClient;
use crate::domain::entities::activity::Activity;
use crate::domain::entities::roll::RollInput;
use crate::domain::repositories::roll_repository::RollRepository;

/// APIベースのロールリポジトリ
pub struct ApiRollRepository {
    client: Arc<ApiClient>,
}

impl ApiRollRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RollRepository for ApiRollRepository {
    async fn save_roll(&self, input: &RollInput) -> Result<()> {
        self.client.save_roll(input).await
    }

    async fn fetch_activities(&self) -> Result<Vec<Activity>> {
        let response = self.client.get_activities().await?;
        Ok(response.activity)
    }
}
