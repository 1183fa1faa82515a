//! Internship domain model.
//!
//! An internship places a student at a company with a required number of
//! hours. Progress is reported as the rounded percentage of completed hours.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::validation::{format_phone, format_tax_id};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::UnknownStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipStatus {
    #[default]
    InProgress,
    Completed,
    Cancelled,
}

impl InternshipStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InternshipStatus::InProgress => "in_progress",
            InternshipStatus::Completed => "completed",
            InternshipStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for InternshipStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_progress" => Ok(InternshipStatus::InProgress),
            "completed" => Ok(InternshipStatus::Completed),
            "cancelled" => Ok(InternshipStatus::Cancelled),
            _ => Err(UnknownStatus {
                kind: "internship",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of required hours already completed, rounded half away from
/// zero and clamped to `0..=100`. Returns 0 when nothing is required.
pub fn progress_percent(completed_hours: i32, required_hours: i32) -> u8 {
    if required_hours <= 0 {
        return 0;
    }
    let ratio = f64::from(completed_hours.max(0)) / f64::from(required_hours) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Internship {
    pub id: i64,
    pub student_id: i64,
    pub company_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub required_hours: i32,
    pub completed_hours: i32,
    pub status: InternshipStatus,
    pub stipend: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Internship {
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.completed_hours, self.required_hours)
    }
}

/// Internship joined with the student's name and the host company's
/// contact columns.
#[derive(Debug, Clone)]
pub struct InternshipDetails {
    pub internship: Internship,
    pub student_name: String,
    pub company_name: String,
    pub company_tax_id: Option<String>,
    pub company_phone: Option<String>,
    pub company_email: Option<String>,
    pub company_address: Option<String>,
    pub company_contact_person: Option<String>,
}

/// Internship as rendered to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InternshipResponse {
    #[serde(flatten)]
    pub internship: Internship,
    pub progress_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<InternshipCompany>,
}

/// Host company summary embedded in internship responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InternshipCompany {
    pub name: String,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
}

impl From<Internship> for InternshipResponse {
    fn from(internship: Internship) -> Self {
        Self {
            progress_percent: internship.progress_percent(),
            internship,
            student_name: None,
            company: None,
        }
    }
}

impl From<InternshipDetails> for InternshipResponse {
    fn from(details: InternshipDetails) -> Self {
        let company = InternshipCompany {
            name: details.company_name,
            tax_id: details.company_tax_id.as_deref().map(format_tax_id),
            phone: details.company_phone.as_deref().map(format_phone),
            email: details.company_email,
            address: details.company_address,
            contact_person: details.company_contact_person,
        };
        Self {
            progress_percent: details.internship.progress_percent(),
            internship: details.internship,
            student_name: Some(details.student_name),
            company: Some(company),
        }
    }
}

/// Request payload for creating an internship.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_create_internship"))]
pub struct CreateInternshipRequest {
    pub student_id: i64,
    pub company_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Required hours must be at least 1"))]
    pub required_hours: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Completed hours cannot be negative"))]
    pub completed_hours: i32,

    #[serde(default)]
    pub status: InternshipStatus,

    #[serde(default)]
    pub stipend: Decimal,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: String,
}

/// Request payload for replacing an internship. The student cannot change.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_update_internship"))]
pub struct UpdateInternshipRequest {
    pub company_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Required hours must be at least 1"))]
    pub required_hours: i32,

    #[validate(range(min = 0, message = "Completed hours cannot be negative"))]
    pub completed_hours: i32,

    pub status: InternshipStatus,

    pub stipend: Decimal,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: String,
}

/// Request payload for setting the completed hours of an internship.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateHoursRequest {
    #[validate(range(min = 0, message = "Hours cannot be negative"))]
    pub hours: i32,
}

/// Query parameters for listing internships.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInternshipsQuery {
    pub status: Option<InternshipStatus>,
}

/// Response for listing internships.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListInternshipsResponse {
    pub internships: Vec<InternshipResponse>,
    pub total: usize,
}

fn check_internship_fields(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    required_hours: i32,
    completed_hours: i32,
    stipend: &Decimal,
) -> Result<(), ValidationError> {
    if end_date.is_some_and(|end| end < start_date) {
        let mut err = ValidationError::new("date_order");
        err.message = Some("End date cannot be before start date".into());
        return Err(err);
    }
    if completed_hours > required_hours {
        let mut err = ValidationError::new("hours_exceeded");
        err.message = Some("Completed hours cannot exceed required hours".into());
        return Err(err);
    }
    super::check_non_negative(stipend, "stipend_range", "Stipend must be zero or positive")
}

fn validate_create_internship(request: &CreateInternshipRequest) -> Result<(), ValidationError> {
    check_internship_fields(
        request.start_date,
        request.end_date,
        request.required_hours,
        request.completed_hours,
        &request.stipend,
    )
}

fn validate_update_internship(request: &UpdateInternshipRequest) -> Result<(), ValidationError> {
    check_internship_fields(
        request.start_date,
        request.end_date,
        request.required_hours,
        request.completed_hours,
        &request.stipend,
    )
}
