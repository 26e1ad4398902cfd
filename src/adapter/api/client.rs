//! Roll-call API Client
//!
//! reqwest を使ったリモート呼び出し

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::Client;

use super::models::{ActivitiesResponse, StudentsResponse};
use crate::adapter::config::Config;
use crate::domain::entities::roll::RollInput;

pub const STUDENTS_ENDPOINT: &str = "get-homeboard-students";
pub const SAVE_ROLL_ENDPOINT: &str = "save-roll";
pub const ACTIVITIES_ENDPOINT: &str = "get-activities";

/// HTTP client for the three roll-call endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Build the full URL of a named endpoint
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    pub async fn get_homeboard_students(&self) -> Result<StudentsResponse> {
        let url = self.endpoint(STUDENTS_ENDPOINT);
        debug!("GET {}", url);

        let response: StudentsResponse = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse students response")?;

        info!("Fetched {} students", response.students.len());
        Ok(response)
    }

    pub async fn save_roll(&self, input: &RollInput) -> Result<()> {
        let url = self.endpoint(SAVE_ROLL_ENDPOINT);
        debug!("POST {} ({} entries)", url, input.len());

        self.http
            .post(&url)
            .json(input)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?;

        Ok(())
    }

    pub async fn get_activities(&self) -> Result<ActivitiesResponse> {
        let url = self.endpoint(ACTIVITIES_ENDPOINT);
        debug!("GET {}", url);

        let response: ActivitiesResponse = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse activities response")?;

        info!("Fetched {} activities", response.activity.len());
        Ok(response)
    }
}
