//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::api::ApiClient;
use crate::adapter::config::Config;
use crate::adapter::repositories::{ApiRollRepository, ApiRosterRepository};
use crate::application::dto::load_state::LoadState;
use crate::application::use_cases::{LoadActivityUseCase, SessionController};
use crate::domain::entities::roll::{MarkFilter, RollState};
use crate::domain::entities::student::StudentId;
use crate::domain::services::aggregation::{SortField, SortOrder};

use super::cli::Command;
use super::display::{format_counts, format_row, to_display_date};

/// Roll-call Workflow
pub struct RollcallWorkflow {
    config: Config,
    controller: SessionController<ApiRosterRepository, ApiRollRepository>,
    activity_use_case: LoadActivityUseCase<ApiRollRepository>,
}

impl RollcallWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(ApiClient::from_config(&config)?);

        // Repository implementations
        let roster_repo = Arc::new(ApiRosterRepository::new(client.clone()));
        let roll_repo = Arc::new(ApiRollRepository::new(client));

        Ok(Self {
            config,
            controller: SessionController::new(roster_repo, roll_repo.clone()),
            activity_use_case: LoadActivityUseCase::new(roll_repo),
        })
    }

    /// Execute one CLI command
    pub async fn execute(&mut self, command: Command) -> Result<()> {
        info!("Using API at {}", self.config.api_base_url);
        if let Some(staff) = &self.config.staff_name {
            println!("✓ Staff: {}", staff);
        }

        match command {
            Command::Roster {
                search,
                sort,
                desc,
                filter,
            } => self.show_roster(search, sort, desc, filter).await,
            Command::Roll {
                marks,
                filter,
                cancel,
                dry_run,
            } => self.take_roll(marks, filter, cancel, dry_run).await,
            Command::Activity => self.show_activity().await,
        }
    }

    async fn load_roster(&mut self) -> Result<()> {
        if let LoadState::Error(message) = self.controller.load_roster().await {
            println!("✗ Failed to load");
            anyhow::bail!("Failed to load roster: {}", message);
        }
        println!("✓ Loaded {} students", self.controller.roster().len());
        Ok(())
    }

    async fn show_roster(
        &mut self,
        search: Option<String>,
        sort: Option<SortField>,
        desc: bool,
        filter: Option<MarkFilter>,
    ) -> Result<()> {
        self.load_roster().await?;

        if search.is_some() {
            self.controller.filter_by_name(search.as_deref());
        }
        if let Some(field) = sort {
            let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
            self.controller.sort(field, order);
        }
        if let Some(filter) = filter {
            self.controller.filter_by_mark(filter);
        }

        self.print_board();
        Ok(())
    }

    async fn take_roll(
        &mut self,
        marks: Vec<(StudentId, RollState)>,
        filter: Option<MarkFilter>,
        cancel: bool,
        dry_run: bool,
    ) -> Result<()> {
        self.load_roster().await?;

        if let Err(e) = self.controller.start() {
            // A roll left open by an earlier failure must not block this one
            let _ = self.controller.cancel();
            return Err(e.into());
        }
        println!("✓ Roll started for {} students", self.controller.roster().len());

        let marked = marks
            .into_iter()
            .try_for_each(|(student_id, state)| self.controller.mark(student_id, state));
        if let Err(e) = marked {
            self.controller.cancel()?;
            println!("✗ Roll cancelled");
            return Err(e.into());
        }

        if let Some(filter) = filter {
            self.controller.filter_by_mark(filter);
        }
        self.print_board();

        if cancel {
            self.controller.cancel()?;
            println!("✓ Roll cancelled");
            return Ok(());
        }

        if dry_run {
            let payload = self.controller.snapshot();
            println!("✓ Dry-run mode (not actually saving)");
            println!("{}", serde_json::to_string_pretty(&payload)?);
            self.controller.cancel()?;
            return Ok(());
        }

        let handle = self.controller.save()?;
        println!("✓ Roll submitted ({} entries)", handle.submitted());

        // The process would exit before the request completes otherwise
        match handle.outcome().await {
            LoadState::Error(message) => println!("⚠ Failed to save roll: {}", message),
            _ => println!("✓ Roll saved"),
        }
        Ok(())
    }

    async fn show_activity(&self) -> Result<()> {
        let summaries = match self.activity_use_case.execute().await {
            LoadState::Loaded(summaries) => summaries,
            LoadState::Error(message) => {
                println!("✗ Failed to load");
                anyhow::bail!("Failed to load activities: {}", message);
            }
            _ => return Ok(()),
        };

        println!(
            "{:<24} {:<16} {:>8} {:>8} {:>6} {:>7}",
            "Name", "Completed At", "Students", "Present", "Late", "Absent"
        );
        for summary in &summaries {
            println!(
                "{:<24} {:<16} {:>8} {:>8} {:>6} {:>7}",
                summary.name,
                to_display_date(&summary.completed_at),
                summary.counts.all,
                summary.counts.present,
                summary.counts.late,
                summary.counts.absent
            );
        }
        Ok(())
    }

    fn print_board(&self) {
        let view = self.controller.view();
        for row in &view.students {
            println!("{}", format_row(row));
        }
        println!("{}", format_counts(&view.counts));
    }

    pub fn controller(&self) -> &SessionController<ApiRosterRepository, ApiRollRepository> {
        &self.controller
    }
}
