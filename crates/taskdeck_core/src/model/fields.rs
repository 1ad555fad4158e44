//! Shared field validation for entity types.
//!
//! # Responsibility
//! - Host the validation checks common to person-like and titled records.
//! - Define the single `ValidationError` type all entities report.
//!
//! # Invariants
//! - Checks are pure; they never mutate or partially accept a value.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure raised at entity construction or mutation.
///
/// Carries the entity name and the offending field/value so callers can
/// render a precise user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field was empty.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// An email value did not contain the `@` character.
    InvalidEmail { entity: &'static str, value: String },
    /// A task status string did not name a known status.
    UnknownStatus { value: String },
    /// An entity id was not a positive integer.
    ZeroId { entity: &'static str },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity} {field} must be a non-empty string")
            }
            Self::InvalidEmail { entity, value } => {
                write!(f, "{entity} email `{value}` must contain '@'")
            }
            Self::UnknownStatus { value } => {
                write!(
                    f,
                    "unknown task status `{value}`; expected todo|in-progress|done"
                )
            }
            Self::ZeroId { entity } => write!(f, "{entity} id must be a positive integer"),
        }
    }
}

impl Error for ValidationError {}

/// Rejects empty string fields (`name`, `title`).
pub(crate) fn require_non_empty(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}

/// Rejects email values without an `@`. No further format validation.
pub(crate) fn require_email(entity: &'static str, value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') {
        return Err(ValidationError::InvalidEmail {
            entity,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Rejects the zero id; collection ids start at 1.
pub(crate) fn require_positive_id(entity: &'static str, id: u64) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::ZeroId { entity });
    }
    Ok(())
}
