//! Domain models for Campus Registry.

pub mod class_section;
pub mod company;
pub mod course;
pub mod dashboard;
pub mod department;
pub mod enrollment;
pub mod internship;
pub mod payment;
pub mod student;

pub use class_section::{ClassSection, ClassSectionDetails};
pub use company::{Company, CompanyResponse};
pub use course::{Course, CourseDetails};
pub use dashboard::{
    CashFlow, DashboardStatistics, LastMonthRevenue, MonthlyRevenue, StudentStatusCounts,
};
pub use department::Department;
pub use enrollment::{Enrollment, EnrollmentDetails, EnrollmentStatus};
pub use internship::{
    progress_percent, Internship, InternshipDetails, InternshipResponse, InternshipStatus,
};
pub use payment::{Payment, PaymentDetails, PaymentStatus};
pub use student::{Student, StudentStatus};

use rust_decimal::Decimal;
use validator::ValidationError;

/// Error returned when a stored or submitted status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} status: {value}")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}

/// Checks that a monetary amount is zero or positive.
pub(crate) fn check_non_negative(
    amount: &Decimal,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        let mut err = ValidationError::new(code);
        err.message = Some(message.into());
        return Err(err);
    }
    Ok(())
}
