//! Payment entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Payment, PaymentDetails, PaymentStatus};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database row mapping for the payments table.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentEntity {
    pub id: i64,
    pub enrollment_id: i64,
    pub amount: Decimal,
    pub payment_type: String,
    pub reference_period: String,
    pub status: String,
    pub payment_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentEntity> for Payment {
    fn from(entity: PaymentEntity) -> Self {
        let status = entity
            .status
            .parse::<PaymentStatus>()
            .unwrap_or_default();

        Self {
            id: entity.id,
            enrollment_id: entity.enrollment_id,
            amount: entity.amount,
            payment_type: entity.payment_type,
            reference_period: entity.reference_period,
            status,
            payment_date: entity.payment_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Payment row joined with the enrolled student and course.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentDetailsEntity {
    #[sqlx(flatten)]
    pub payment: PaymentEntity,
    pub student_id: i64,
    pub student_name: String,
    pub course_name: String,
}

impl From<PaymentDetailsEntity> for PaymentDetails {
    fn from(entity: PaymentDetailsEntity) -> Self {
        Self {
            payment: entity.payment.into(),
            student_id: entity.student_id,
            student_name: entity.student_name,
            course_name: entity.course_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_entity_conversion() {
        let entity = PaymentEntity {
            id: 3,
            enrollment_id: 8,
            amount: Decimal::new(45050, 2),
            payment_type: "tuition".to_string(),
            reference_period: "2025-04".to_string(),
            status: "overdue".to_string(),
            payment_date: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let payment: Payment = entity.into();
        assert_eq!(payment.status, PaymentStatus::Overdue);
        assert_eq!(payment.amount, Decimal::new(45050, 2));
    }
}
