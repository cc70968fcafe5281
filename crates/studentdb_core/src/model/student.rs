//! Student record.
//!
//! # Responsibility
//! - Hold course and per-subject marks on top of the shared identity.
//! - Derive average and letter grade on demand.
//!
//! # Invariants
//! - `course` is trimmed and non-empty.
//! - `marks` holds at least one mark and every mark is within
//!   `MIN_MARK..=MAX_MARK`.
//! - Deserialization runs the same validation as `Student::new`.

use crate::model::grade::{adjusted_average, grade, Grade};
use crate::model::person::{
    normalize_required, Identity, Person, PersonId, ValidationError, ValidationResult, MAX_MARK,
    MIN_MARK,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Student record stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentFields", into = "StudentFields")]
pub struct Student {
    identity: Identity,
    course: String,
    marks: Vec<i32>,
}

/// Flat wire shape used for serde.
#[derive(Serialize, Deserialize)]
struct StudentFields {
    id: PersonId,
    name: String,
    course: String,
    marks: Vec<i32>,
}

impl TryFrom<StudentFields> for Student {
    type Error = ValidationError;

    fn try_from(value: StudentFields) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name, value.course, value.marks)
    }
}

impl From<Student> for StudentFields {
    fn from(value: Student) -> Self {
        Self {
            id: value.identity.id(),
            name: value.identity.name().to_string(),
            course: value.course,
            marks: value.marks,
        }
    }
}

impl Student {
    /// Creates a student with every field validated.
    ///
    /// Fields are checked in `id`, `name`, `course`, `marks` order and the
    /// first failure is returned.
    pub fn new(
        id: PersonId,
        name: impl AsRef<str>,
        course: impl AsRef<str>,
        marks: Vec<i32>,
    ) -> ValidationResult<Self> {
        let identity = Identity::new(id, name)?;
        let course = normalize_required(course.as_ref(), ValidationError::EmptyCourse)?;
        let marks = validate_marks(marks)?;
        Ok(Self {
            identity,
            course,
            marks,
        })
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> &[i32] {
        &self.marks
    }

    pub fn set_id(&mut self, id: PersonId) -> ValidationResult<()> {
        self.identity.set_id(id)
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) -> ValidationResult<()> {
        self.identity.set_name(name)
    }

    pub fn set_course(&mut self, course: impl AsRef<str>) -> ValidationResult<()> {
        self.course = normalize_required(course.as_ref(), ValidationError::EmptyCourse)?;
        Ok(())
    }

    pub fn set_marks(&mut self, marks: Vec<i32>) -> ValidationResult<()> {
        self.marks = validate_marks(marks)?;
        Ok(())
    }

    /// Arithmetic mean of the stored marks.
    pub fn average(&self) -> f64 {
        adjusted_average(&self.marks, 0)
    }

    pub fn grade(&self) -> Grade {
        self.grade_with_grace(0)
    }

    pub fn grade_with_grace(&self, grace_marks_each: i32) -> Grade {
        grade(&self.marks, grace_marks_each)
    }
}

impl Person for Student {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn render(&self, verbose: bool) -> String {
        let mut out = format!(
            "[Student] ID: {}, Name: {}\n  Course: {}\n",
            self.id(),
            self.name(),
            self.course
        );
        if verbose {
            out.push_str(&format!("  Marks: {}\n", format_marks(&self.marks)));
        }
        out.push_str(&format!(
            "  Average: {:.2}, Grade: {}",
            self.average(),
            self.grade()
        ));
        out
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Student{{id={}, name='{}', course='{}', avg={:.2}, grade={}}}",
            self.id(),
            self.name(),
            self.course,
            self.average(),
            self.grade()
        )
    }
}

fn validate_marks(marks: Vec<i32>) -> ValidationResult<Vec<i32>> {
    if marks.is_empty() {
        return Err(ValidationError::EmptyMarks);
    }
    if let Some(bad) = marks
        .iter()
        .copied()
        .find(|mark| !(MIN_MARK..=MAX_MARK).contains(mark))
    {
        return Err(ValidationError::MarkOutOfRange(bad));
    }
    Ok(marks)
}

fn format_marks(marks: &[i32]) -> String {
    let joined = marks
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
