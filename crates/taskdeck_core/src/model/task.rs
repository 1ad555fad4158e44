//! Task domain model.
//!
//! # Invariants
//! - `title` is non-empty.
//! - `project_id` referenced an existing project at creation time.
//! - `status` is one of the closed [`TaskStatus`] set; unknown wire values
//!   fail deserialization.
//! - `assigned_to` is optional and may point at a user id.

use crate::model::fields::{require_non_empty, require_positive_id, ValidationError};
use crate::model::project::ProjectId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Numeric identifier for tasks.
pub type TaskId = u64;

const ENTITY: &str = "task";

/// Task lifecycle state.
///
/// Wire values are kebab-case: `todo`, `in-progress`, `done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ValidationError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A unit of work inside a project, optionally assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    project_id: ProjectId,
    status: TaskStatus,
    assigned_to: Option<UserId>,
}

impl Task {
    /// Creates a task with status `todo` and no assignee.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        project_id: ProjectId,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        require_positive_id(ENTITY, id)?;
        require_non_empty(ENTITY, "title", &title)?;
        Ok(Self {
            id,
            title,
            project_id,
            status: TaskStatus::default(),
            assigned_to: None,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Replaces the title, keeping the current value on rejection.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        require_non_empty(ENTITY, "title", &title)?;
        self.title = title;
        Ok(())
    }

    /// Moves the task to a new lifecycle state.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Assigns the task to a user.
    pub fn assign_to(&mut self, user_id: UserId) {
        self.assigned_to = Some(user_id);
    }
}

/// Plain serializable twin of [`Task`].
///
/// `status` defaults to `todo` and `assigned_to` to absent when missing
/// from persisted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub project_id: ProjectId,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub assigned_to: Option<UserId>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::new(record.id, record.title, record.project_id)?;
        task.status = record.status;
        task.assigned_to = record.assigned_to;
        Ok(task)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            project_id: task.project_id,
            status: task.status,
            assigned_to: task.assigned_to,
        }
    }
}
