//! Closed set of record kinds.

use crate::model::person::{Identity, Person};
use crate::model::student::Student;
use crate::model::teacher::Teacher;

/// Any record derived from the shared person identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Student(Student),
    Teacher(Teacher),
}

impl Person for Record {
    fn identity(&self) -> &Identity {
        match self {
            Self::Student(student) => student.identity(),
            Self::Teacher(teacher) => teacher.identity(),
        }
    }

    fn render(&self, verbose: bool) -> String {
        match self {
            Self::Student(student) => student.render(verbose),
            Self::Teacher(teacher) => teacher.render(verbose),
        }
    }
}

impl From<Student> for Record {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<Teacher> for Record {
    fn from(value: Teacher) -> Self {
        Self::Teacher(value)
    }
}
