//! # Aggregation Service
//!
//! 名簿とロールセッションから集計値・絞り込みビュー・並び替えを導出する
//!
//! すべて純粋関数で、内部状態を持たない。

use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::entities::roll::{MarkFilter, RollEntry, RollState};
use crate::domain::entities::student::{Student, StudentId};

/// 出欠の集計値
///
/// 常にソースから再計算される派生値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollCounts {
    pub all: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl RollCounts {
    /// マーク済みの件数
    pub fn marked(&self) -> usize {
        self.present + self.late + self.absent
    }

    pub fn get(&self, state: RollState) -> usize {
        match state {
            RollState::Present => self.present,
            RollState::Late => self.late,
            RollState::Absent => self.absent,
        }
    }
}

/// 並び替えのキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FirstName,
    LastName,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_name" | "firstname" => Ok(SortField::FirstName),
            "last_name" | "lastname" => Ok(SortField::LastName),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// 集計サービス
pub struct Aggregator;

impl Aggregator {
    /// 集計値を計算する
    ///
    /// # Arguments
    ///
    /// * `entries` - 現在のセッションのエントリ
    /// * `frozen_total` - ロール開始時点の生徒数（`all` にそのまま使う）
    pub fn compute_counts(entries: &[RollEntry], frozen_total: usize) -> RollCounts {
        entries.iter().fold(
            RollCounts {
                all: frozen_total,
                ..RollCounts::default()
            },
            |mut counts, entry| {
                match entry.roll_state {
                    RollState::Present => counts.present += 1,
                    RollState::Late => counts.late += 1,
                    RollState::Absent => counts.absent += 1,
                }
                counts
            },
        )
    }

    /// 過去のロール記録の集計（`all` はエントリ数）
    pub fn count_entries(entries: &[RollEntry]) -> RollCounts {
        Self::compute_counts(entries, entries.len())
    }

    /// "first_name last_name" に対する大文字小文字を区別しない部分一致
    ///
    /// クエリが空または `None` の場合は名簿をそのまま返す
    pub fn filter_by_name(roster: &[Student], query: Option<&str>) -> Vec<Student> {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return roster.to_vec(),
        };

        roster
            .iter()
            .filter(|student| student.full_name().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// マークで絞り込む
    ///
    /// 結果が空になる場合は `previous` をそのまま返す
    pub fn filter_by_mark(
        roster: &[Student],
        entries: &[RollEntry],
        mark: MarkFilter,
        previous: &[Student],
    ) -> Vec<Student> {
        let state = match mark {
            MarkFilter::All => return roster.to_vec(),
            MarkFilter::Only(state) => state,
        };

        let filtered: Vec<Student> = roster
            .iter()
            .filter(|student| Self::mark_of(entries, student.id) == Some(state))
            .cloned()
            .collect();

        if filtered.is_empty() {
            return previous.to_vec();
        }
        filtered
    }

    /// 指定フィールドで安定ソートする（大文字小文字を区別しない）
    pub fn sort_by_field(students: &[Student], field: SortField, order: SortOrder) -> Vec<Student> {
        let key = |student: &Student| -> String {
            match field {
                SortField::FirstName => student.first_name.to_lowercase(),
                SortField::LastName => student.last_name.to_lowercase(),
            }
        };

        let mut sorted = students.to_vec();
        sorted.sort_by(|a, b| {
            let ordering: Ordering = key(a).cmp(&key(b));
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    /// 生徒の現在のマーク（未マークなら `None`）
    pub fn mark_of(entries: &[RollEntry], student_id: StudentId) -> Option<RollState> {
        entries
            .iter()
            .find(|entry| entry.student_id == student_id)
            .map(|entry| entry.roll_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Student> {
        vec![
            Student::new(1, "Ann", "Zed"),
            Student::new(2, "Bob", "Young"),
            Student::new(3, "carla", "Young"),
        ]
    }

    fn ids(students: &[Student]) -> Vec<u64> {
        students.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_compute_counts_uses_frozen_total() {
        let entries = vec![
            RollEntry::new(1, RollState::Present),
            RollEntry::new(2, RollState::Late),
        ];

        let counts = Aggregator::compute_counts(&entries, 5);

        assert_eq!(
            counts,
            RollCounts {
                all: 5,
                present: 1,
                late: 1,
                absent: 0
            }
        );
        assert_eq!(counts.marked(), 2);
    }

    #[test]
    fn test_count_entries_uses_entry_length() {
        let entries = vec![
            RollEntry::new(1, RollState::Absent),
            RollEntry::new(2, RollState::Absent),
            RollEntry::new(3, RollState::Present),
        ];

        let counts = Aggregator::count_entries(&entries);

        assert_eq!(counts.all, 3);
        assert_eq!(counts.get(RollState::Absent), 2);
        assert_eq!(counts.get(RollState::Present), 1);
    }

    #[test]
    fn test_filter_by_name_empty_query_is_identity() {
        let roster = roster();
        assert_eq!(Aggregator::filter_by_name(&roster, Some("")), roster);
        assert_eq!(Aggregator::filter_by_name(&roster, None), roster);
    }

    #[test]
    fn test_filter_by_name_case_insensitive_across_full_name() {
        let roster = roster();

        assert_eq!(ids(&Aggregator::filter_by_name(&roster, Some("YOUNG"))), vec![2, 3]);
        assert_eq!(ids(&Aggregator::filter_by_name(&roster, Some("n z"))), vec![1]);
        assert!(Aggregator::filter_by_name(&roster, Some("xyz")).is_empty());
    }

    #[test]
    fn test_filter_by_mark_all_returns_roster() {
        let roster = roster();
        let result = Aggregator::filter_by_mark(&roster, &[], MarkFilter::All, &[]);
        assert_eq!(result, roster);
    }

    #[test]
    fn test_filter_by_mark_matches_current_state() {
        let roster = roster();
        let entries = vec![
            RollEntry::new(1, RollState::Late),
            RollEntry::new(3, RollState::Late),
            RollEntry::new(2, RollState::Present),
        ];

        let late = Aggregator::filter_by_mark(&roster, &entries, RollState::Late.into(), &[]);

        assert_eq!(ids(&late), vec![1, 3]);
    }

    #[test]
    fn test_filter_by_mark_empty_result_keeps_previous_view() {
        let roster = roster();
        let entries = vec![RollEntry::new(2, RollState::Present)];
        let previous = vec![roster[1].clone()];

        let result =
            Aggregator::filter_by_mark(&roster, &entries, RollState::Absent.into(), &previous);

        assert_eq!(result, previous);
    }

    #[test]
    fn test_sort_by_first_name_asc_and_desc() {
        let roster = vec![Student::new(2, "Bob", "Young"), Student::new(1, "Ann", "Zed")];

        let asc = Aggregator::sort_by_field(&roster, SortField::FirstName, SortOrder::Asc);
        let desc = Aggregator::sort_by_field(&asc, SortField::FirstName, SortOrder::Asc.toggled());

        assert_eq!(ids(&asc), vec![1, 2]);
        assert_eq!(ids(&desc), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let roster = roster();
        let sorted = Aggregator::sort_by_field(&roster, SortField::FirstName, SortOrder::Desc);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_in_both_orders() {
        let roster = roster();

        let asc = Aggregator::sort_by_field(&roster, SortField::LastName, SortOrder::Asc);
        let desc = Aggregator::sort_by_field(&roster, SortField::LastName, SortOrder::Desc);

        // Bob と carla は同じ last_name
        assert_eq!(ids(&asc), vec![2, 3, 1]);
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("first-name".parse::<SortField>().unwrap(), SortField::FirstName);
        assert_eq!("lastname".parse::<SortField>().unwrap(), SortField::LastName);
        assert!("age".parse::<SortField>().is_err());
    }
}
