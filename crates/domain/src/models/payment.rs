//! Payment domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::UnknownStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

impl PaymentStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "pending" => Ok(PaymentStatus::Pending),
            "overdue" => Ok(PaymentStatus::Overdue),
            _ => Err(UnknownStatus {
                kind: "payment",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment billed against an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payment {
    pub id: i64,
    pub enrollment_id: i64,
    pub amount: Decimal,
    pub payment_type: String,
    /// Billing month in `YYYY-MM` form.
    pub reference_period: String,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment joined with the enrolled student and course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaymentDetails {
    #[serde(flatten)]
    pub payment: Payment,
    pub student_id: i64,
    pub student_name: String,
    pub course_name: String,
}

/// Request payload for recording a payment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_create_amount"))]
pub struct CreatePaymentRequest {
    pub enrollment_id: i64,

    pub amount: Decimal,

    #[validate(length(min = 1, max = 30, message = "Payment type must be 1-30 characters"))]
    pub payment_type: String,

    #[validate(custom(function = "shared::validation::validate_reference_period"))]
    pub reference_period: String,

    #[serde(default)]
    pub status: PaymentStatus,
}

/// Request payload for replacing a payment.
///
/// The enrollment a payment belongs to cannot be changed.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_update_amount"))]
pub struct UpdatePaymentRequest {
    pub amount: Decimal,

    #[validate(length(min = 1, max = 30, message = "Payment type must be 1-30 characters"))]
    pub payment_type: String,

    #[validate(custom(function = "shared::validation::validate_reference_period"))]
    pub reference_period: String,

    #[serde(default)]
    pub status: PaymentStatus,
}

fn validate_create_amount(request: &CreatePaymentRequest) -> Result<(), ValidationError> {
    super::check_non_negative(&request.amount, "amount_range", "Amount must be zero or positive")
}

fn validate_update_amount(request: &UpdatePaymentRequest) -> Result<(), ValidationError> {
    super::check_non_negative(&request.amount, "amount_range", "Amount must be zero or positive")
}

/// Response for listing payments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPaymentsResponse {
    pub payments: Vec<PaymentDetails>,
    pub total: usize,
}
