//! Student domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::UnknownStatus;

/// Academic standing of a student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    #[default]
    Active,
    /// Studies temporarily suspended at the student's request.
    Locked,
    Inactive,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 3] = [Self::Active, Self::Locked, Self::Inactive];

    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Locked => "locked",
            StudentStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for StudentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(StudentStatus::Active),
            "locked" => Ok(StudentStatus::Locked),
            "inactive" => Ok(StudentStatus::Inactive),
            _ => Err(UnknownStatus {
                kind: "student",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub birth_date: NaiveDate,
    pub status: StudentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_birth_date"))]
pub struct StudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    #[validate(custom(function = "shared::validation::validate_state_code"))]
    pub state: String,

    pub birth_date: NaiveDate,

    #[serde(default)]
    pub status: StudentStatus,
}

fn validate_birth_date(request: &StudentRequest) -> Result<(), ValidationError> {
    if request.birth_date > Utc::now().date_naive() {
        let mut err = ValidationError::new("birth_date_future");
        err.message = Some("Birth date cannot be in the future".into());
        return Err(err);
    }
    Ok(())
}

/// Response for listing students.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListStudentsResponse {
    pub students: Vec<Student>,
    pub total: usize,
}
