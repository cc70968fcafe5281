//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage details away from service and console orchestration.
//!
//! # Invariants
//! - Records entering a repository are already validated by the model.

pub mod student_repo;
