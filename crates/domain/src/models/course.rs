//! Course domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A degree course offered by a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Course {
    pub id: i64,
    pub department_id: i64,
    pub description: String,
    pub code: String,
    /// Monthly tuition fee.
    pub tuition: Decimal,
    pub duration_semesters: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course joined with its department's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CourseDetails {
    #[serde(flatten)]
    pub course: Course,
    pub department_name: String,
}

/// Request payload for creating or replacing a course.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_course_request"))]
pub struct CourseRequest {
    pub department_id: i64,

    #[validate(length(min = 1, max = 100, message = "Description must be 1-100 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 10, message = "Code must be 1-10 characters"))]
    pub code: String,

    pub tuition: Decimal,

    #[validate(range(min = 1, max = 20, message = "Duration must be between 1 and 20 semesters"))]
    pub duration_semesters: i32,
}

fn validate_course_request(request: &CourseRequest) -> Result<(), ValidationError> {
    super::check_non_negative(
        &request.tuition,
        "tuition_range",
        "Tuition must be zero or positive",
    )
}

/// Response for listing courses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListCoursesResponse {
    pub courses: Vec<CourseDetails>,
    pub total: usize,
}
