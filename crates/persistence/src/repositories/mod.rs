//! Repository implementations for database operations.

pub mod class_section;
pub mod company;
pub mod course;
pub mod dashboard;
pub mod department;
pub mod enrollment;
pub mod internship;
pub mod payment;
pub mod student;

pub use class_section::ClassSectionRepository;
pub use company::CompanyRepository;
pub use course::CourseRepository;
pub use dashboard::DashboardRepository;
pub use department::DepartmentRepository;
pub use enrollment::EnrollmentRepository;
pub use internship::InternshipRepository;
pub use payment::PaymentRepository;
pub use student::StudentRepository;
