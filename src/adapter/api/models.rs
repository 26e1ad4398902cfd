//! API Response Models
//!
//! ロールコールAPIのレスポンス形式

use serde::Deserialize;

use crate::domain::entities::activity::Activity;
use crate::domain::entities::student::Student;

/// Response of `get-homeboard-students`
#[derive(Debug, Clone, Deserialize)]
pub struct StudentsResponse {
    #[serde(default)]
    pub students: Vec<Student>,
}

/// Response of `get-activities`
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitiesResponse {
    #[serde(default)]
    pub activity: Vec<Activity>,
}
