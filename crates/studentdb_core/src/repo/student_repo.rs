//! Student repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed CRUD over validated `Student` records.
//! - Keep insertion order stable for listing.
//!
//! # Invariants
//! - Every key equals the stored student's `id`.
//! - `add` is the only way to introduce a new key.
//! - Reads hand out owned snapshots; stored records change only through
//!   `update` or `delete`.

use crate::model::person::{Person, PersonId};
use crate::model::student::Student;
use indexmap::IndexMap;

/// Repository interface for student CRUD operations.
///
/// Absence is reported through `bool`/`Option` results rather than errors.
pub trait StudentRepository {
    /// Inserts `student`; returns `false` without mutation on duplicate id.
    fn add(&mut self, student: Student) -> bool;
    /// Replaces the record stored under `id`; returns `false` if absent.
    fn update(&mut self, id: PersonId, student: Student) -> bool;
    /// Removes the record stored under `id`; returns `false` if absent.
    fn delete(&mut self, id: PersonId) -> bool;
    /// Snapshot of all records in insertion order.
    fn get_all(&self) -> Vec<Student>;
    /// Snapshot of one record.
    fn get_by_id(&self, id: PersonId) -> Option<Student>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime student store backed by an insertion-ordered map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    students: IndexMap<PersonId, Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&mut self, student: Student) -> bool {
        if self.students.contains_key(&student.id()) {
            return false;
        }
        self.students.insert(student.id(), student);
        true
    }

    fn update(&mut self, id: PersonId, student: Student) -> bool {
        // Re-keying through update would break the key == id invariant.
        if student.id() != id {
            return false;
        }
        match self.students.get_mut(&id) {
            Some(slot) => {
                *slot = student;
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: PersonId) -> bool {
        self.students.shift_remove(&id).is_some()
    }

    fn get_all(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    fn get_by_id(&self, id: PersonId) -> Option<Student> {
        self.students.get(&id).cloned()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
