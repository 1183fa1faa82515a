//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod class_section;
pub mod company;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod internship;
pub mod payment;
pub mod student;

pub use class_section::{ClassSectionDetailsEntity, ClassSectionEntity};
pub use company::CompanyEntity;
pub use course::{CourseDetailsEntity, CourseEntity};
pub use department::DepartmentEntity;
pub use enrollment::{EnrollmentDetailsEntity, EnrollmentEntity};
pub use internship::{InternshipDetailsEntity, InternshipEntity};
pub use payment::{PaymentDetailsEntity, PaymentEntity};
pub use student::StudentEntity;
