//! Shared utilities for the Campus Registry backend.
//!
//! This crate provides field-level helpers used by the domain and API crates:
//! - Validators for state codes, tax ids, phone numbers and reference periods
//! - Normalization and display formatting for tax ids and phone numbers

pub mod validation;
