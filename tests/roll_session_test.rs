//! Roll Session Integration Tests
//!
//! SessionController を公開APIから通して検証する

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use rollcall::application::dto::{LoadState, RollMode};
use rollcall::application::use_cases::SessionController;
use rollcall::domain::entities::activity::Activity;
use rollcall::domain::entities::roll::{RollEntry, RollInput, RollState};
use rollcall::domain::entities::student::Student;
use rollcall::domain::repositories::roll_repository::RollRepository;
use rollcall::domain::repositories::roster_repository::RosterRepository;
use rollcall::domain::services::aggregation::{RollCounts, SortField, SortOrder};

struct FixedRosterRepository {
    students: Vec<Student>,
}

#[async_trait]
impl RosterRepository for FixedRosterRepository {
    async fn fetch_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }
}

struct RecordingRollRepository {
    saved: Mutex<Vec<RollInput>>,
}

impl RecordingRollRepository {
    fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
        }
    }

    fn saved(&self) -> Vec<RollInput> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl RollRepository for RecordingRollRepository {
    async fn save_roll(&self, input: &RollInput) -> Result<()> {
        self.saved.lock().unwrap().push(input.clone());
        Ok(())
    }

    async fn fetch_activities(&self) -> Result<Vec<Activity>> {
        Ok(vec![])
    }
}

fn ann_and_bob() -> Vec<Student> {
    vec![Student::new(1, "Ann", "Zed"), Student::new(2, "Bob", "Young")]
}

async fn controller_with(
    students: Vec<Student>,
) -> (
    SessionController<FixedRosterRepository, RecordingRollRepository>,
    Arc<RecordingRollRepository>,
) {
    let roll_repo = Arc::new(RecordingRollRepository::new());
    let mut controller = SessionController::new(
        Arc::new(FixedRosterRepository { students }),
        roll_repo.clone(),
    );
    assert_eq!(controller.load_roster().await, LoadState::Loaded(()));
    (controller, roll_repo)
}

#[tokio::test]
async fn test_marks_produce_counts() {
    let (mut controller, _) = controller_with(ann_and_bob()).await;

    controller.start().unwrap();
    assert_eq!(controller.frozen_total(), Some(2));

    controller.mark(1, RollState::Present).unwrap();
    controller.mark(2, RollState::Late).unwrap();

    assert_eq!(
        controller.counts(),
        RollCounts {
            all: 2,
            present: 1,
            late: 1,
            absent: 0
        }
    );
}

#[tokio::test]
async fn test_cancel_returns_to_clean_state() {
    let (mut controller, roll_repo) = controller_with(ann_and_bob()).await;

    controller.start().unwrap();
    controller.mark(1, RollState::Present).unwrap();
    controller.cancel().unwrap();

    assert!(controller.session_entries().is_empty());
    assert_eq!(controller.counts().marked(), 0);
    assert_eq!(controller.roll_mode(), RollMode::Inactive);
    assert!(roll_repo.saved().is_empty());
}

#[tokio::test]
async fn test_remark_keeps_single_entry() {
    let (mut controller, _) = controller_with(ann_and_bob()).await;

    controller.start().unwrap();
    controller.mark(1, RollState::Absent).unwrap();
    controller.mark(1, RollState::Present).unwrap();

    assert_eq!(
        controller.session_entries(),
        &[RollEntry::new(1, RollState::Present)]
    );
    assert_eq!(controller.counts().absent, 0);
}

#[tokio::test]
async fn test_sort_by_first_name_toggles() {
    let (mut controller, _) = controller_with(ann_and_bob()).await;

    let first_names = |students: &[Student]| -> Vec<String> {
        students.iter().map(|s| s.first_name.clone()).collect()
    };

    assert_eq!(
        first_names(controller.sort(SortField::FirstName, SortOrder::Asc)),
        vec!["Ann", "Bob"]
    );
    assert_eq!(
        first_names(controller.sort(SortField::FirstName, SortOrder::Asc.toggled())),
        vec!["Bob", "Ann"]
    );
}

#[tokio::test]
async fn test_distinct_marks_sum_to_marked_count() {
    let students: Vec<Student> = (1..=6)
        .map(|id| Student::new(id, format!("First{}", id), format!("Last{}", id)))
        .collect();
    let (mut controller, _) = controller_with(students).await;
    controller.start().unwrap();

    let states = [RollState::Present, RollState::Late, RollState::Absent];
    for id in 1..=4u64 {
        controller.mark(id, states[(id as usize) % 3]).unwrap();
    }

    let counts = controller.counts();
    assert_eq!(counts.present + counts.late + counts.absent, 4);
    assert!(counts.marked() <= counts.all);
    assert_eq!(counts.all, 6);
}

#[tokio::test]
async fn test_save_submits_session_then_starts_clean() {
    let (mut controller, roll_repo) = controller_with(ann_and_bob()).await;

    controller.start().unwrap();
    controller.mark(2, RollState::Absent).unwrap();
    controller.mark(1, RollState::Late).unwrap();
    let handle = controller.save().unwrap();

    assert_eq!(controller.roll_mode(), RollMode::Inactive);
    assert_eq!(handle.outcome().await, LoadState::Loaded(()));
    assert_eq!(
        roll_repo.saved(),
        vec![RollInput::new(vec![
            RollEntry::new(2, RollState::Absent),
            RollEntry::new(1, RollState::Late),
        ])]
    );

    controller.start().unwrap();
    assert!(controller.session_entries().is_empty());
    assert_eq!(controller.counts().marked(), 0);
}
