//! Project repository operations.

use crate::model::project::Project;
use crate::model::user::User;
use crate::repo::ids::next_id;
use crate::repo::{RepoError, RepoResult};
use crate::store::Store;
use log::info;

/// Project use cases over an injected store.
pub struct ProjectRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> ProjectRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Resolves the owner by name, then validates, allocates an id, appends
    /// and saves. An unknown owner fails the whole operation with nothing
    /// persisted.
    pub fn create(
        &self,
        owner_name: &str,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> RepoResult<Project> {
        let mut db = self.store.load()?;
        let owner_id = db
            .user_by_name(owner_name)
            .map(User::id)
            .ok_or_else(|| RepoError::UserNotFound(owner_name.to_string()))?;

        let id = next_id(db.projects.iter().map(Project::id));
        let project = Project::new(id, title, description, due_date, owner_id)?;
        db.projects.push(project.clone());
        self.store.save(&db)?;

        info!("event=project_create module=repo status=ok id={id} owner={owner_id}");
        Ok(project)
    }

    /// All projects in stored order, optionally filtered to one owner.
    ///
    /// An unknown owner name fails the listing; there is no partial output.
    pub fn list(&self, owner_name: Option<&str>) -> RepoResult<Vec<Project>> {
        let db = self.store.load()?;
        match owner_name {
            None => Ok(db.projects),
            Some(name) => {
                let owner_id = db
                    .user_by_name(name)
                    .map(User::id)
                    .ok_or_else(|| RepoError::UserNotFound(name.to_string()))?;
                Ok(db
                    .projects
                    .into_iter()
                    .filter(|project| project.user_id() == owner_id)
                    .collect())
            }
        }
    }

    /// Resolves a project by case-insensitive title; first match wins.
    pub fn find_by_title(&self, title: &str) -> RepoResult<Option<Project>> {
        Ok(self.store.load()?.project_by_title(title).cloned())
    }
}
