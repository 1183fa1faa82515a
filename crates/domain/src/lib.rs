//! Domain layer for the Campus Registry backend.
//!
//! This crate contains:
//! - Domain models (Department, Course, ClassSection, Student, Enrollment,
//!   Payment, Company, Internship)
//! - Request/response payloads with field validation
//! - Dashboard aggregates and internship progress arithmetic

pub mod models;
