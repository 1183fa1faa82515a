//! HTTP route handlers.

pub mod classes;
pub mod companies;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod enrollments;
pub mod frontend;
pub mod health;
pub mod internships;
pub mod payments;
pub mod students;
