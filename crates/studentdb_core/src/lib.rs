//! Core logic for the student records console.
//! This crate owns every record invariant; the binary only wires I/O.

pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, RuntimeConfig};
pub use console::{Console, ConsoleError, ConsoleResult, MenuChoice};
pub use logging::{default_log_level, init_logging};
pub use model::grade::{adjusted_average, grade, grade_default, Grade};
pub use model::person::{Identity, Person, PersonId, ValidationError, ValidationResult};
pub use model::record::Record;
pub use model::student::Student;
pub use model::teacher::Teacher;
pub use repo::student_repo::{InMemoryStudentRepository, StudentRepository};
pub use service::seed::seed_sample_data;
pub use service::student_service::StudentService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
