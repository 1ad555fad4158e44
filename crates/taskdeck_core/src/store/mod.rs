//! Whole-database persistence.
//!
//! # Responsibility
//! - Define the `Database` aggregate and the `Store` load/save contract.
//! - Provide the JSON-file implementation used by the CLI and an in-memory
//!   implementation for tests and embedding.
//!
//! # Invariants
//! - `load`/`save` move the entire database as one unit; there is no
//!   partial read or write surface.
//! - A missing persisted file is equivalent to three empty collections.

use crate::model::project::Project;
use crate::model::task::{Task, TaskId};
use crate::model::user::User;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod json_store;

pub use json_store::{CorruptPolicy, JsonFileStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure at the store boundary.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem read/write/lock failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Persisted content could not be decoded into a valid database.
    ///
    /// Only surfaced under [`CorruptPolicy::Fail`]; the default policy
    /// downgrades corruption to an empty-database fallback.
    Corrupt { path: PathBuf, detail: String },
    /// Database serialization failure on the save path.
    Serialize(serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failed at `{}`: {source}", path.display())
            }
            Self::Corrupt { path, detail } => {
                write!(f, "corrupted database at `{}`: {detail}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize database: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { .. } => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// In-memory aggregate of all three collections at a point in time.
///
/// Collections keep insertion order; lookup helpers resolve human-readable
/// keys case-insensitively, first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Database {
    /// Resolves a user by case-insensitive name.
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        let needle = name.to_lowercase();
        self.users
            .iter()
            .find(|user| user.name().to_lowercase() == needle)
    }

    /// Resolves a project by case-insensitive title.
    pub fn project_by_title(&self, title: &str) -> Option<&Project> {
        let needle = title.to_lowercase();
        self.projects
            .iter()
            .find(|project| project.title().to_lowercase() == needle)
    }

    /// Finds a task by id for in-place mutation.
    pub fn task_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}

/// Durable load/save contract for the whole database.
pub trait Store {
    /// Loads the full database snapshot. A missing backing file yields an
    /// empty database, not an error.
    fn load(&self) -> StoreResult<Database>;

    /// Persists the full database, replacing any prior state.
    fn save(&self, db: &Database) -> StoreResult<()>;
}

/// Volatile store keeping the database in process memory.
///
/// Used by tests and embedders that want repository semantics without a
/// backing file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    db: RefCell<Database>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing snapshot.
    pub fn with_database(db: Database) -> Self {
        Self {
            db: RefCell::new(db),
        }
    }

    /// Returns a copy of the current state, for assertions.
    pub fn snapshot(&self) -> Database {
        self.db.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> StoreResult<Database> {
        Ok(self.db.borrow().clone())
    }

    fn save(&self, db: &Database) -> StoreResult<()> {
        *self.db.borrow_mut() = db.clone();
        Ok(())
    }
}
