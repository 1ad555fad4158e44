//! Repository operations over the persisted database.
//!
//! # Responsibility
//! - Combine store, entity model and identity allocation into the
//!   create/list/find/complete use cases.
//! - Enforce cross-entity referential rules at operation time.
//!
//! # Invariants
//! - Every mutating operation is one load → validate/mutate → save cycle;
//!   a failing step aborts the cycle before anything is persisted.
//! - Lookup misses surface as per-entity `NotFound` errors, never as silent
//!   defaults. The single designed soft-fail is the task-assignee lookup in
//!   `TaskRepository::create`.

use crate::model::fields::ValidationError;
use crate::model::task::TaskId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ids;
pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Operation-level failure, distinguished per entity so callers can render
/// a precise message.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Store(StoreError),
    /// No user matched the given name (case-insensitive).
    UserNotFound(String),
    /// No project matched the given title (case-insensitive).
    ProjectNotFound(String),
    /// No task carried the given id.
    TaskNotFound(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::UserNotFound(name) => write!(f, "no user found with name `{name}`"),
            Self::ProjectNotFound(title) => write!(f, "no project found with title `{title}`"),
            Self::TaskNotFound(id) => write!(f, "no task found with id {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::UserNotFound(_) | Self::ProjectNotFound(_) | Self::TaskNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
