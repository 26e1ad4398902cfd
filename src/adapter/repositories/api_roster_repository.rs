//! API Roster Repository Implementation
//!
//! RosterRepositoryのHTTP実装

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::api::ApiClient;
use crate::domain::entities::student::Student;
use crate::domain::repositories::roster_repository::RosterRepository;

/// APIベースの名簿リポジトリ
pub struct ApiRosterRepository {
    client: Arc<ApiClient>,
}

impl ApiRosterRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RosterRepository for ApiRosterRepository {
    async fn fetch_students(&self) -> Result<Vec<Student>> {
        let response = self.client.get_homeboard_students().await?;
        Ok(response.students)
    }
}
