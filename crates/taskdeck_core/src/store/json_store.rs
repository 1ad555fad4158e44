//! JSON flat-file store.
//!
//! # Responsibility
//! - Persist the whole database as one JSON file with three named arrays.
//! - Serialize concurrent CLI invocations via an advisory file lock.
//!
//! # Invariants
//! - The lock is acquired at open and held for the store's lifetime, so one
//!   load/mutate/save cycle never interleaves with another process's.
//! - Saves go through a sibling temp file and a rename; a clean write never
//!   leaves the target half-written.
//! - Corrupted content is downgraded to an empty database under the default
//!   policy. Re-saving after that fallback discards the prior file content;
//!   this favors availability over data integrity and is the documented
//!   data-loss risk of [`CorruptPolicy::FallbackEmpty`].

use super::{Database, Store, StoreError, StoreResult};
use fs2::FileExt;
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Behavior when the persisted file exists but cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptPolicy {
    /// Log a warning and continue from an empty database.
    #[default]
    FallbackEmpty,
    /// Propagate [`StoreError::Corrupt`] to the caller.
    Fail,
}

/// File-backed store holding an exclusive advisory lock while open.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    policy: CorruptPolicy,
    // Held for the store lifetime; the advisory lock releases on close.
    _lock: File,
}

impl JsonFileStore {
    /// Opens a store at `path` with the default corruption fallback.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with_policy(path, CorruptPolicy::default())
    }

    /// Opens a store at `path`, choosing how decode failures are handled.
    ///
    /// Creates the containing directory when missing and blocks until the
    /// advisory lock on the sibling `.lock` file is acquired.
    pub fn open_with_policy(path: impl Into<PathBuf>, policy: CorruptPolicy) -> StoreResult<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        let lock_path = path.with_extension("lock");
        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .map_err(|err| StoreError::io(&lock_path, err))?;
        lock.lock_exclusive()
            .map_err(|err| StoreError::io(&lock_path, err))?;

        info!(
            "event=store_open module=store status=ok path={}",
            path.display()
        );

        Ok(Self {
            path,
            policy,
            _lock: lock,
        })
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> StoreResult<Database> {
        ensure_parent_dir(&self.path)?;

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=db_load module=store status=empty path={}",
                    self.path.display()
                );
                return Ok(Database::default());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        match serde_json::from_str::<Database>(&raw) {
            Ok(db) => {
                info!(
                    "event=db_load module=store status=ok users={} projects={} tasks={}",
                    db.users.len(),
                    db.projects.len(),
                    db.tasks.len()
                );
                Ok(db)
            }
            Err(err) => match self.policy {
                CorruptPolicy::FallbackEmpty => {
                    warn!(
                        "event=db_load module=store status=corrupt policy=fallback_empty path={} error={}",
                        self.path.display(),
                        err
                    );
                    Ok(Database::default())
                }
                CorruptPolicy::Fail => Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    detail: err.to_string(),
                }),
            },
        }
    }

    fn save(&self, db: &Database) -> StoreResult<()> {
        ensure_parent_dir(&self.path)?;

        let serialized = serde_json::to_string_pretty(db)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serialized).map_err(|err| StoreError::io(&tmp_path, err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| StoreError::io(&self.path, err))?;

        info!(
            "event=db_save module=store status=ok users={} projects={} tasks={}",
            db.users.len(),
            db.projects.len(),
            db.tasks.len()
        );
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }
    }
    Ok(())
}
