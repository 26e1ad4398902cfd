//! # Session Controller
//!
//! ロールの開始・マーク・絞り込み・キャンセル・保存を統括するユースケース
//!
//! 状態遷移は `Inactive → Active`（start）と `Active → Inactive`（cancel / save）のみ。
//! 操作は `&mut self` で直列化されるため、ストアにロックは不要。

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::application::dto::home_board_view::{HomeBoardView, RollMode, StudentRow};
use crate::application::dto::load_state::LoadState;
use crate::application::stores::{RollSessionStore, RosterStore};
use crate::domain::entities::roll::{MarkFilter, RollEntry, RollInput, RollState};
use crate::domain::entities::student::{Student, StudentId};
use crate::domain::error::RollError;
use crate::domain::repositories::roll_repository::RollRepository;
use crate::domain::repositories::roster_repository::RosterRepository;
use crate::domain::services::aggregation::{Aggregator, RollCounts, SortField, SortOrder};

/// 保存リクエストのハンドル
///
/// ローカル状態は `save` の時点で既にリセットされている。
/// このハンドルはリモート側の結果を観測するためだけに使う。
pub struct SaveHandle {
    submitted: usize,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl SaveHandle {
    /// 送信したエントリ数
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// 保存リクエストの完了を待つ
    pub async fn outcome(self) -> LoadState<()> {
        match self.handle.await {
            Ok(result) => LoadState::from_result(result),
            Err(e) => LoadState::Error(format!("save task failed: {}", e)),
        }
    }
}

/// セッションコントローラー
pub struct SessionController<R: RosterRepository, S: RollRepository> {
    roster_repository: Arc<R>,
    roll_repository: Arc<S>,
    roster: RosterStore,
    session: RollSessionStore,
    roster_phase: LoadState<()>,
    mode: RollMode,
    /// ロール開始時点の生徒数
    frozen_total: usize,
    /// ロール開始時点で名簿にいた生徒
    markable: HashSet<StudentId>,
    /// `None` は名簿全体を表示
    filtered: Option<Vec<Student>>,
    sort_order: SortOrder,
}

impl<R: RosterRepository, S: RollRepository> SessionController<R, S> {
    /// 新しいコントローラーを作成
    ///
    /// # Arguments
    ///
    /// * `roster_repository` - 名簿リポジトリ
    /// * `roll_repository` - ロールリポジトリ
    pub fn new(roster_repository: Arc<R>, roll_repository: Arc<S>) -> Self {
        Self {
            roster_repository,
            roll_repository,
            roster: RosterStore::new(),
            session: RollSessionStore::new(),
            roster_phase: LoadState::Idle,
            mode: RollMode::Inactive,
            frozen_total: 0,
            markable: HashSet::new(),
            filtered: None,
            sort_order: SortOrder::Asc,
        }
    }

    /// 名簿を読み込む
    ///
    /// 失敗してもリトライはしない。再度呼び出せば復帰できる。
    /// ロール中に再読み込みしても `frozen_total` は変わらない。
    pub async fn load_roster(&mut self) -> LoadState<()> {
        self.roster_phase = LoadState::Loading;

        let state = LoadState::from_result(self.roster_repository.fetch_students().await);
        self.roster_phase = state.phase();

        match state {
            LoadState::Loaded(students) => {
                info!("Loaded roster: {} students", students.len());
                self.roster.load(students);
                self.filtered = None;
            }
            LoadState::Error(ref message) => warn!("Failed to load roster: {}", message),
            _ => {}
        }

        self.roster_phase.clone()
    }

    /// ロールを開始する
    ///
    /// # Errors
    ///
    /// 既にロール中の場合は `RollError::AlreadyActive`
    pub fn start(&mut self) -> Result<(), RollError> {
        if self.mode == RollMode::Active {
            return Err(RollError::AlreadyActive);
        }

        self.mode = RollMode::Active;
        self.frozen_total = self.roster.len();
        self.markable = self.roster.get().iter().map(|s| s.id).collect();

        info!("Roll started: {} students", self.frozen_total);
        Ok(())
    }

    /// 生徒の出欠をマークする
    ///
    /// # Errors
    ///
    /// - ロール中でない場合は `RollError::NotActive`
    /// - ロール開始時の名簿にない生徒は `RollError::UnknownStudent`
    pub fn mark(&mut self, student_id: StudentId, state: RollState) -> Result<(), RollError> {
        if self.mode != RollMode::Active {
            return Err(RollError::NotActive);
        }
        if !self.markable.contains(&student_id) {
            return Err(RollError::UnknownStudent(student_id));
        }

        self.session.set_mark(student_id, state);
        debug!("Marked student {} as {}", student_id, state);
        Ok(())
    }

    /// マークで絞り込む
    ///
    /// 該当者がいない場合は直前の表示を維持する
    pub fn filter_by_mark(&mut self, mark: MarkFilter) -> &[Student] {
        let previous = self.visible_students().to_vec();
        self.filtered = Some(Aggregator::filter_by_mark(
            self.roster.get(),
            self.session.get_all(),
            mark,
            &previous,
        ));
        self.visible_students()
    }

    /// 名前で絞り込む
    pub fn filter_by_name(&mut self, query: Option<&str>) -> &[Student] {
        self.filtered = Some(Aggregator::filter_by_name(self.roster.get(), query));
        self.visible_students()
    }

    /// 現在の表示を並び替える
    pub fn sort(&mut self, field: SortField, order: SortOrder) -> &[Student] {
        self.sort_order = order;
        self.filtered = Some(Aggregator::sort_by_field(
            self.visible_students(),
            field,
            order,
        ));
        self.visible_students()
    }

    /// 並び順を反転して並び替える
    pub fn toggle_sort(&mut self, field: SortField) -> &[Student] {
        let order = self.sort_order.toggled();
        self.sort(field, order)
    }

    /// ロールをキャンセルする
    ///
    /// # Errors
    ///
    /// ロール中でない場合は `RollError::NotActive`
    pub fn cancel(&mut self) -> Result<(), RollError> {
        if self.mode != RollMode::Active {
            return Err(RollError::NotActive);
        }

        info!(
            "Roll cancelled: discarding {} marks",
            self.session.get_all().len()
        );
        self.end_session();
        Ok(())
    }

    /// ロールを保存する
    ///
    /// 保存リクエストの完了を待たずにローカル状態をリセットする。
    /// リモート側の失敗はログに残すだけで、ロールバックもリトライもしない。
    ///
    /// # Errors
    ///
    /// ロール中でない場合は `RollError::NotActive`
    pub fn save(&mut self) -> Result<SaveHandle, RollError>
    where
        S: 'static,
    {
        if self.mode != RollMode::Active {
            return Err(RollError::NotActive);
        }

        let input = self.snapshot();
        let submitted = input.len();
        self.end_session();

        let repository = Arc::clone(&self.roll_repository);
        let handle = tokio::spawn(async move {
            let result = repository.save_roll(&input).await;
            match &result {
                Ok(()) => info!("Saved roll: {} entries", input.len()),
                Err(e) => warn!("Failed to save roll ({} entries): {:#}", input.len(), e),
            }
            result
        });

        info!("Roll submitted: {} entries", submitted);
        Ok(SaveHandle { submitted, handle })
    }

    /// 現在の集計値
    pub fn counts(&self) -> RollCounts {
        match self.mode {
            RollMode::Active => Aggregator::compute_counts(self.session.get_all(), self.frozen_total),
            RollMode::Inactive => Aggregator::compute_counts(&[], self.roster.len()),
        }
    }

    /// 生徒の現在のマーク
    pub fn mark_of(&self, student_id: StudentId) -> Option<RollState> {
        Aggregator::mark_of(self.session.get_all(), student_id)
    }

    /// 表示中の生徒
    ///
    /// 名簿が読み込まれていない（またはエラー）の場合は空
    pub fn visible_students(&self) -> &[Student] {
        if !self.roster_phase.is_loaded() {
            return &[];
        }
        self.filtered.as_deref().unwrap_or(self.roster.get())
    }

    /// 表示層向けのスナップショット
    pub fn view(&self) -> HomeBoardView {
        HomeBoardView {
            phase: self.roster_phase.clone(),
            roll_mode: self.mode,
            counts: self.counts(),
            students: self
                .visible_students()
                .iter()
                .map(|student| StudentRow {
                    student: student.clone(),
                    mark: self.mark_of(student.id),
                })
                .collect(),
        }
    }

    pub fn roll_mode(&self) -> RollMode {
        self.mode
    }

    pub fn roster_phase(&self) -> &LoadState<()> {
        &self.roster_phase
    }

    pub fn roster(&self) -> &[Student] {
        self.roster.get()
    }

    pub fn session_entries(&self) -> &[RollEntry] {
        self.session.get_all()
    }

    /// 現在のセッションを保存用ペイロードに変換する（状態は変更しない）
    pub fn snapshot(&self) -> RollInput {
        self.session.snapshot()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// ロール中のみ `Some`
    pub fn frozen_total(&self) -> Option<usize> {
        match self.mode {
            RollMode::Active => Some(self.frozen_total),
            RollMode::Inactive => None,
        }
    }

    fn end_session(&mut self) {
        self.mode = RollMode::Inactive;
        self.session.reset();
        self.frozen_total = 0;
        self.markable.clear();
        self.filtered = None;
    }
}
