//! Display Helpers
//!
//! 端末出力用の整形

use chrono::{DateTime, Datelike, Utc};

use crate::application::dto::home_board_view::StudentRow;
use crate::domain::services::aggregation::RollCounts;

/// Format a timestamp as e.g. "Mar 1st 2021"
pub fn to_display_date(value: &DateTime<Utc>) -> String {
    format!(
        "{} {}{} {}",
        value.format("%b"),
        value.day(),
        ordinal_suffix(value.day()),
        value.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn format_counts(counts: &RollCounts) -> String {
    format!(
        "All: {} | Present: {} | Late: {} | Absent: {}",
        counts.all, counts.present, counts.late, counts.absent
    )
}

pub fn format_row(row: &StudentRow) -> String {
    let mark = row.mark.map(|m| m.as_str()).unwrap_or("unmarked");
    format!(
        "{:>5}  {:<32} {}",
        row.student.id,
        row.student.full_name(),
        mark
    )
}
