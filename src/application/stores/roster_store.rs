//! # Roster Store
//!
//! 読み込まれた生徒一覧の唯一の保持先

use crate::domain::entities::student::{Student, StudentId};

/// 名簿ストア
///
/// `load` で丸ごと置き換えるのみで、個別の生徒レコードは変更しない
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    students: Vec<Student>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 名簿を置き換える（後勝ち）
    pub fn load(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    /// 受け取った順序のままの生徒一覧
    pub fn get(&self) -> &[Student] {
        &self.students
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.iter().any(|s| s.id == id)
    }
}
