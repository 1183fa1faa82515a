//! Internship entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Internship, InternshipDetails, InternshipStatus};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database row mapping for the internships table.
#[derive(Debug, Clone, FromRow)]
pub struct InternshipEntity {
    pub id: i64,
    pub student_id: i64,
    pub company_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub required_hours: i32,
    pub completed_hours: i32,
    pub status: String,
    pub stipend: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InternshipEntity> for Internship {
    fn from(entity: InternshipEntity) -> Self {
        let status = entity
            .status
            .parse::<InternshipStatus>()
            .unwrap_or_default();

        Self {
            id: entity.id,
            student_id: entity.student_id,
            company_id: entity.company_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            required_hours: entity.required_hours,
            completed_hours: entity.completed_hours,
            status,
            stipend: entity.stipend,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Internship row joined with the student name and company columns.
#[derive(Debug, Clone, FromRow)]
pub struct InternshipDetailsEntity {
    #[sqlx(flatten)]
    pub internship: InternshipEntity,
    pub student_name: String,
    pub company_name: String,
    pub company_tax_id: Option<String>,
    pub company_phone: Option<String>,
    pub company_email: Option<String>,
    pub company_address: Option<String>,
    pub company_contact_person: Option<String>,
}

impl From<InternshipDetailsEntity> for InternshipDetails {
    fn from(entity: InternshipDetailsEntity) -> Self {
        Self {
            internship: entity.internship.into(),
            student_name: entity.student_name,
            company_name: entity.company_name,
            company_tax_id: entity.company_tax_id,
            company_phone: entity.company_phone,
            company_email: entity.company_email,
            company_address: entity.company_address,
            company_contact_person: entity.company_contact_person,
        }
    }
}
