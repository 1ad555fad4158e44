//! Project domain model.
//!
//! # Invariants
//! - `title` is non-empty; it doubles as the case-insensitive lookup key.
//! - `user_id` referenced an existing user at creation time; the reference
//!   is not re-checked afterwards.

use crate::model::fields::{require_non_empty, require_positive_id, ValidationError};
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Numeric identifier for projects.
pub type ProjectId = u64;

const ENTITY: &str = "project";

/// A project owned by one user, grouping tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord", into = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    due_date: String,
    user_id: UserId,
}

impl Project {
    /// Creates a project, rejecting an empty title.
    ///
    /// `description` and `due_date` are free-form and may be empty.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        require_positive_id(ENTITY, id)?;
        require_non_empty(ENTITY, "title", &title)?;
        Ok(Self {
            id,
            title,
            description: description.into(),
            due_date: due_date.into(),
            user_id,
        })
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Replaces the title, keeping the current value on rejection.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        require_non_empty(ENTITY, "title", &title)?;
        self.title = title;
        Ok(())
    }
}

/// Plain serializable twin of [`Project`].
///
/// `description` and `due_date` default to empty when absent from persisted
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    pub user_id: UserId,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        Project::new(
            record.id,
            record.title,
            record.description,
            record.due_date,
            record.user_id,
        )
    }
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            due_date: project.due_date,
            user_id: project.user_id,
        }
    }
}
