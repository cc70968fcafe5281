//! Teacher record.
//!
//! Teachers share the person identity with students but are never stored in
//! the student repository.

use crate::model::person::{
    normalize_required, Identity, Person, PersonId, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeacherFields", into = "TeacherFields")]
pub struct Teacher {
    identity: Identity,
    department: String,
}

#[derive(Serialize, Deserialize)]
struct TeacherFields {
    id: PersonId,
    name: String,
    department: String,
}

impl TryFrom<TeacherFields> for Teacher {
    type Error = ValidationError;

    fn try_from(value: TeacherFields) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name, value.department)
    }
}

impl From<Teacher> for TeacherFields {
    fn from(value: Teacher) -> Self {
        Self {
            id: value.identity.id(),
            name: value.identity.name().to_string(),
            department: value.department,
        }
    }
}

impl Teacher {
    pub fn new(
        id: PersonId,
        name: impl AsRef<str>,
        department: impl AsRef<str>,
    ) -> ValidationResult<Self> {
        let identity = Identity::new(id, name)?;
        let department =
            normalize_required(department.as_ref(), ValidationError::EmptyDepartment)?;
        Ok(Self {
            identity,
            department,
        })
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_id(&mut self, id: PersonId) -> ValidationResult<()> {
        self.identity.set_id(id)
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) -> ValidationResult<()> {
        self.identity.set_name(name)
    }

    pub fn set_department(&mut self, department: impl AsRef<str>) -> ValidationResult<()> {
        self.department =
            normalize_required(department.as_ref(), ValidationError::EmptyDepartment)?;
        Ok(())
    }
}

impl Person for Teacher {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn render(&self, _verbose: bool) -> String {
        format!(
            "[Teacher] ID: {}, Name: {}\n  Department: {}",
            self.id(),
            self.name(),
            self.department
        )
    }
}
