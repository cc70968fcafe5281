//! Record model for the student database.
//!
//! # Responsibility
//! - Define the shared person identity and its concrete record kinds.
//! - Own field validation so invalid records cannot be constructed.
//!
//! # Invariants
//! - Every record has a positive `id` and a non-blank trimmed `name`.
//! - Setters either apply a validated value or leave the record unchanged.

pub mod grade;
pub mod person;
pub mod record;
pub mod student;
pub mod teacher;
