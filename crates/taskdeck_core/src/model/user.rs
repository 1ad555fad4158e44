//! User domain model.
//!
//! # Invariants
//! - `name` is non-empty; it doubles as the case-insensitive lookup key.
//! - `email` contains `@`.
//! - `id` is positive and unique within the user collection.

use crate::model::fields::{require_email, require_non_empty, require_positive_id, ValidationError};
use serde::{Deserialize, Serialize};

/// Numeric identifier for users.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = u64;

const ENTITY: &str = "user";

/// A person who can own projects and be assigned tasks.
///
/// Fields are private so every write path goes through a re-validating
/// setter; serialization round-trips through [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord", into = "UserRecord")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Creates a user, rejecting an empty name or an email without `@`.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        require_positive_id(ENTITY, id)?;
        require_non_empty(ENTITY, "name", &name)?;
        require_email(ENTITY, &email)?;
        Ok(Self { id, name, email })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replaces the name, keeping the current value on rejection.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        require_non_empty(ENTITY, "name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the email, keeping the current value on rejection.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        let email = email.into();
        require_email(ENTITY, &email)?;
        self.email = email;
        Ok(())
    }
}

/// Plain serializable twin of [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl TryFrom<UserRecord> for User {
    type Error = ValidationError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        User::new(record.id, record.name, record.email)
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
