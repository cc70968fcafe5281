//! Shared person identity and validation errors.
//!
//! # Responsibility
//! - Hold the `id`/`name` pair common to every record kind.
//! - Expose the `Person` capability used by polymorphic call sites.
//!
//! # Invariants
//! - `id > 0`.
//! - `name` is stored trimmed and is never empty.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier shared by students and teachers.
pub type PersonId = i32;

/// Inclusive lower bound for a single mark.
pub const MIN_MARK: i32 = 0;
/// Inclusive upper bound for a single mark.
pub const MAX_MARK: i32 = 100;

/// Field-level validation failure for record construction and setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NonPositiveId(PersonId),
    EmptyName,
    EmptyCourse,
    EmptyDepartment,
    EmptyMarks,
    MarkOutOfRange(i32),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(_) => write!(f, "ID must be positive"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::EmptyCourse => write!(f, "Course cannot be empty"),
            Self::EmptyDepartment => write!(f, "Department cannot be empty"),
            Self::EmptyMarks => write!(f, "Marks cannot be empty"),
            Self::MarkOutOfRange(_) => write!(f, "Each mark must be {MIN_MARK}..{MAX_MARK}"),
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validated `id`/`name` pair embedded by every record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: PersonId,
    name: String,
}

impl Identity {
    /// Creates an identity, validating `id` before `name`.
    pub fn new(id: PersonId, name: impl AsRef<str>) -> ValidationResult<Self> {
        Ok(Self {
            id: validate_id(id)?,
            name: normalize_required(name.as_ref(), ValidationError::EmptyName)?,
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_id(&mut self, id: PersonId) -> ValidationResult<()> {
        self.id = validate_id(id)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) -> ValidationResult<()> {
        self.name = normalize_required(name.as_ref(), ValidationError::EmptyName)?;
        Ok(())
    }
}

/// Capability shared by all record kinds.
///
/// Call sites that only need identity and rendering work against this trait
/// instead of a concrete record type.
pub trait Person {
    fn identity(&self) -> &Identity;

    /// Renders the record as multi-line text.
    ///
    /// `verbose` controls kind-specific detail (e.g. student marks). Kinds
    /// without optional detail ignore it.
    fn render(&self, verbose: bool) -> String;

    fn id(&self) -> PersonId {
        self.identity().id()
    }

    fn name(&self) -> &str {
        self.identity().name()
    }

    /// Full detail rendering.
    fn display_details(&self) -> String {
        self.render(true)
    }
}

pub(crate) fn validate_id(id: PersonId) -> ValidationResult<PersonId> {
    if id <= 0 {
        return Err(ValidationError::NonPositiveId(id));
    }
    Ok(id)
}

/// Trims `value` and rejects it with `error` when nothing remains.
pub(crate) fn normalize_required(value: &str, error: ValidationError) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Identity, ValidationError};

    #[test]
    fn identity_trims_name() {
        let identity = Identity::new(7, "  Ravi ").unwrap();
        assert_eq!(identity.name(), "Ravi");
    }

    #[test]
    fn rejected_setter_keeps_previous_value() {
        let mut identity = Identity::new(7, "Ravi").unwrap();

        assert_eq!(identity.set_id(-3), Err(ValidationError::NonPositiveId(-3)));
        assert_eq!(identity.set_name("\t"), Err(ValidationError::EmptyName));
        assert_eq!(identity.id(), 7);
        assert_eq!(identity.name(), "Ravi");
    }

    #[test]
    fn id_is_checked_before_name() {
        let err = Identity::new(0, "").unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveId(0));
    }
}
