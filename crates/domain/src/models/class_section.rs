//! Class section domain model.
//!
//! A class section is one offering of a course in a given semester, with its
//! own room, shift and capacity. Students enroll in class sections.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassSection {
    pub id: i64,
    pub course_id: i64,
    pub semester: i32,
    pub capacity: i32,
    pub period: String,
    pub shift: String,
    pub room: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Class section joined with its course's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassSectionDetails {
    #[serde(flatten)]
    pub class_section: ClassSection,
    pub course_name: String,
}

/// Request payload for creating or replacing a class section.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_class_dates"))]
pub struct ClassSectionRequest {
    pub course_id: i64,

    #[validate(range(min = 1, max = 20, message = "Semester must be between 1 and 20"))]
    pub semester: i32,

    #[validate(range(min = 1, max = 500, message = "Capacity must be between 1 and 500"))]
    pub capacity: i32,

    #[validate(length(min = 1, max = 20, message = "Period must be 1-20 characters"))]
    pub period: String,

    #[validate(length(min = 1, max = 20, message = "Shift must be 1-20 characters"))]
    pub shift: String,

    #[validate(length(min = 1, max = 20, message = "Room must be 1-20 characters"))]
    pub room: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn validate_class_dates(request: &ClassSectionRequest) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        let mut err = ValidationError::new("date_order");
        err.message = Some("End date cannot be before start date".into());
        return Err(err);
    }
    Ok(())
}

/// Response for listing class sections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListClassSectionsResponse {
    pub classes: Vec<ClassSectionDetails>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ClassSectionRequest {
        ClassSectionRequest {
            course_id: 1,
            semester: 1,
            capacity: 50,
            period: "2025.1".to_string(),
            shift: "evening".to_string(),
            room: "B-204".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        }
    }

    #[test]
    fn test_class_section_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_class_section_request_same_day_is_valid() {
        let mut request = valid_request();
        request.end_date = request.start_date;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_class_section_request_end_before_start() {
        let mut request = valid_request();
        request.end_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("__all__"));
    }

    #[test]
    fn test_class_section_request_zero_capacity() {
        let mut request = valid_request();
        request.capacity = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_class_section_request_deserialization() {
        let json = r#"{
            "course_id": 4,
            "semester": 2,
            "capacity": 40,
            "period": "2025.2",
            "shift": "morning",
            "room": "A-101",
            "start_date": "2025-08-01",
            "end_date": "2025-12-15"
        }"#;
        let request: ClassSectionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.course_id, 4);
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
    }

    #[test]
    fn test_class_section_request_invalid_date_format() {
        let json = r#"{
            "course_id": 4,
            "semester": 2,
            "capacity": 40,
            "period": "2025.2",
            "shift": "morning",
            "room": "A-101",
            "start_date": "01/08/2025",
            "end_date": "2025-12-15"
        }"#;
        let result: Result<ClassSectionRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
