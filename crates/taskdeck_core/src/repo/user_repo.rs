//! User repository operations.

use crate::model::user::User;
use crate::repo::ids::next_id;
use crate::repo::RepoResult;
use crate::store::Store;
use log::info;

/// User use cases over an injected store.
pub struct UserRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> UserRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Validates, allocates an id, appends and saves. Returns the created
    /// user; nothing is persisted when validation fails.
    pub fn create(&self, name: &str, email: &str) -> RepoResult<User> {
        let mut db = self.store.load()?;
        let id = next_id(db.users.iter().map(User::id));
        let user = User::new(id, name, email)?;
        db.users.push(user.clone());
        self.store.save(&db)?;

        info!("event=user_create module=repo status=ok id={id}");
        Ok(user)
    }

    /// All users in stored order; an empty list is a valid result.
    pub fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.store.load()?.users)
    }

    /// Resolves a user by case-insensitive name; first match wins.
    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self.store.load()?.user_by_name(name).cloned())
    }
}
