//! Enrollment domain model.
//!
//! An enrollment links a student to a class section for a term. Payments are
//! billed against enrollments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use super::UnknownStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Locked,
    Cancelled,
}

impl EnrollmentStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Locked => "locked",
            EnrollmentStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(EnrollmentStatus::Active),
            "locked" => Ok(EnrollmentStatus::Locked),
            "cancelled" => Ok(EnrollmentStatus::Cancelled),
            _ => Err(UnknownStatus {
                kind: "enrollment",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enrollment joined with student, course and class display columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnrollmentDetails {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub student_name: String,
    pub course_name: String,
    pub class_period: String,
}

/// Request payload for creating or replacing an enrollment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct EnrollmentRequest {
    pub student_id: i64,
    pub class_id: i64,

    /// Defaults to today when omitted.
    pub enrollment_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: EnrollmentStatus,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl EnrollmentRequest {
    /// The enrollment date to store.
    pub fn effective_date(&self) -> NaiveDate {
        self.enrollment_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Response for listing enrollments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListEnrollmentsResponse {
    pub enrollments: Vec<EnrollmentDetails>,
    pub total: usize,
}
