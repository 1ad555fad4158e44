//! Task repository operations.

use crate::model::project::Project;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::model::user::User;
use crate::repo::ids::next_id;
use crate::repo::{RepoError, RepoResult};
use crate::store::Store;
use log::{info, warn};

/// Result of a task creation, carrying the designed soft-fail.
///
/// When the requested assignee name resolves to no user, the task is still
/// created unassigned and `unresolved_assignee` holds the name for the
/// caller to surface as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    pub task: Task,
    pub unresolved_assignee: Option<String>,
}

/// Task use cases over an injected store.
pub struct TaskRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> TaskRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Resolves the project by title (hard failure when unknown), resolves
    /// the optional assignee by name (soft failure when unknown), then
    /// validates, allocates an id, appends and saves.
    pub fn create(
        &self,
        project_title: &str,
        title: &str,
        assignee_name: Option<&str>,
    ) -> RepoResult<CreatedTask> {
        let mut db = self.store.load()?;
        let project_id = db
            .project_by_title(project_title)
            .map(Project::id)
            .ok_or_else(|| RepoError::ProjectNotFound(project_title.to_string()))?;

        let id = next_id(db.tasks.iter().map(Task::id));
        let mut task = Task::new(id, title, project_id)?;

        let mut unresolved_assignee = None;
        if let Some(name) = assignee_name {
            match db.user_by_name(name) {
                Some(user) => task.assign_to(user.id()),
                None => {
                    warn!("event=task_create module=repo status=assignee_unresolved id={id}");
                    unresolved_assignee = Some(name.to_string());
                }
            }
        }

        db.tasks.push(task.clone());
        self.store.save(&db)?;

        info!("event=task_create module=repo status=ok id={id} project={project_id}");
        Ok(CreatedTask {
            task,
            unresolved_assignee,
        })
    }

    /// All tasks in stored order, optionally filtered to one project.
    ///
    /// An unknown project title fails the listing; there is no partial
    /// output.
    pub fn list(&self, project_title: Option<&str>) -> RepoResult<Vec<Task>> {
        let db = self.store.load()?;
        match project_title {
            None => Ok(db.tasks),
            Some(title) => {
                let project_id = db
                    .project_by_title(title)
                    .map(Project::id)
                    .ok_or_else(|| RepoError::ProjectNotFound(title.to_string()))?;
                Ok(db
                    .tasks
                    .into_iter()
                    .filter(|task| task.project_id() == project_id)
                    .collect())
            }
        }
    }

    /// Marks the task `done` and saves. Idempotent for already-done tasks;
    /// an unknown id fails with nothing saved.
    pub fn complete(&self, id: TaskId) -> RepoResult<Task> {
        let mut db = self.store.load()?;
        let task = db
            .task_by_id_mut(id)
            .ok_or(RepoError::TaskNotFound(id))?;
        task.set_status(TaskStatus::Done);
        let completed = task.clone();
        self.store.save(&db)?;

        info!("event=task_complete module=repo status=ok id={id}");
        Ok(completed)
    }
}
