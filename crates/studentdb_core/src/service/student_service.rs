//! Student use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for the console and other callers.
//! - Emit one metadata-only log event per mutation outcome.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Log events carry ids only, never names or marks.

use crate::model::person::{Person, PersonId};
use crate::model::student::Student;
use crate::repo::student_repo::StudentRepository;
use log::{debug, info, warn};

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Adds a student; `false` means the id is already taken.
    pub fn add_student(&mut self, student: Student) -> bool {
        let id = student.id();
        let added = self.repo.add(student);
        if added {
            info!("event=student_add module=service status=ok id={id}");
        } else {
            warn!("event=student_add module=service status=conflict id={id}");
        }
        added
    }

    /// Commits a full replacement for the record stored under `id`.
    pub fn update_student(&mut self, id: PersonId, student: Student) -> bool {
        let updated = self.repo.update(id, student);
        if updated {
            info!("event=student_update module=service status=ok id={id}");
        } else {
            warn!("event=student_update module=service status=not_found id={id}");
        }
        updated
    }

    pub fn delete_student(&mut self, id: PersonId) -> bool {
        let deleted = self.repo.delete(id);
        if deleted {
            info!("event=student_delete module=service status=ok id={id}");
        } else {
            warn!("event=student_delete module=service status=not_found id={id}");
        }
        deleted
    }

    /// Lists every student in insertion order.
    pub fn list_students(&self) -> Vec<Student> {
        let students = self.repo.get_all();
        debug!(
            "event=student_list module=service status=ok count={}",
            students.len()
        );
        students
    }

    pub fn get_student(&self, id: PersonId) -> Option<Student> {
        self.repo.get_by_id(id)
    }
}
