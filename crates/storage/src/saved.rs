//! The saved-jobs collaborator: a store seam the board calls into but never
//! waits on for UI state. Failures are logged and swallowed at call sites;
//! the optimistic toggle never blocks on them. A conflict on save is a
//! benign duplicate, not a failure.
//!
//! The board binary itself exposes no save endpoints; this is the interface
//! an account-aware deployment plugs its front end and remote backend into.
//! `LocalSavedStore` covers the signed-out device-bound case and the
//! migration runs once on sign-in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// What a saved entry carries: title, company and location only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSummary {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Error)]
pub enum SavedStoreError {
    #[error("already saved")]
    Conflict,
    #[error("saved store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("saved store serialization: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("saved store backend: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SavedJobsStore: Send + Sync {
    async fn is_saved(&self, job_id: &str) -> Result<bool, SavedStoreError>;
    /// At most one writer per key; saving an existing key yields `Conflict`.
    async fn save(&self, job_id: &str, summary: SavedSummary) -> Result<(), SavedStoreError>;
    async fn unsave(&self, job_id: &str) -> Result<(), SavedStoreError>;
    async fn list_saved(&self) -> Result<Vec<(String, SavedSummary)>, SavedStoreError>;
}

/// Device-bound store persisting a JSON map to a file. Used while the
/// visitor is signed out.
pub struct LocalSavedStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, SavedSummary>>,
}

impl LocalSavedStore {
    pub async fn open(path: PathBuf) -> Result<Self, SavedStoreError> {
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub async fn clear(&self) -> Result<(), SavedStoreError> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        self.persist(&entries).await
    }

    async fn persist(&self, entries: &BTreeMap<String, SavedSummary>) -> Result<(), SavedStoreError> {
        let content = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SavedJobsStore for LocalSavedStore {
    async fn is_saved(&self, job_id: &str) -> Result<bool, SavedStoreError> {
        Ok(self.entries.lock().await.contains_key(job_id))
    }

    async fn save(&self, job_id: &str, summary: SavedSummary) -> Result<(), SavedStoreError> {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(job_id) {
            return Err(SavedStoreError::Conflict);
        }
        entries.insert(job_id.to_string(), summary);
        self.persist(&entries).await
    }

    async fn unsave(&self, job_id: &str) -> Result<(), SavedStoreError> {
        let mut entries = self.entries.lock().await;
        entries.remove(job_id);
        self.persist(&entries).await
    }

    async fn list_saved(&self) -> Result<Vec<(String, SavedSummary)>, SavedStoreError> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// One-time move of device-bound entries into the account-bound store on
/// sign-in. Keyed by the composite `account::job` id so a re-run is a no-op;
/// local entries are cleared only after a remote write was *attempted* for
/// every one of them, whatever the individual results.
pub async fn migrate_local_to_remote(
    local: &LocalSavedStore,
    remote: &dyn SavedJobsStore,
    account: &str,
) -> Result<usize, SavedStoreError> {
    let entries = local.list_saved().await?;
    let mut migrated = 0;
    for (job_id, summary) in entries {
        let key = format!("{account}::{job_id}");
        match remote.save(&key, summary).await {
            Ok(()) => migrated += 1,
            Err(SavedStoreError::Conflict) => {
                debug!(%key, "already migrated, skipping");
            }
            Err(e) => {
                warn!(%key, error = %e, "remote save failed during migration");
            }
        }
    }
    local.clear().await?;
    Ok(migrated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn summary(title: &str) -> SavedSummary {
        SavedSummary {
            title: title.to_string(),
            company: Some("Clinic".to_string()),
            location: Some("Lagos".to_string()),
        }
    }

    async fn local_with(entries: &[&str]) -> (tempfile::TempDir, LocalSavedStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSavedStore::open(dir.path().join("saved.json"))
            .await
            .unwrap();
        for id in entries {
            store.save(id, summary(id)).await.unwrap();
        }
        (dir, store)
    }

    /// Account-bound double: remembers keys, optionally fails some.
    struct MemRemote {
        entries: Mutex<BTreeMap<String, SavedSummary>>,
        fail_keys: HashSet<String>,
    }

    impl MemRemote {
        fn new(fail_keys: &[&str]) -> Self {
            Self {
                entries: Mutex::new(BTreeMap::new()),
                fail_keys: fail_keys.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl SavedJobsStore for MemRemote {
        async fn is_saved(&self, job_id: &str) -> Result<bool, SavedStoreError> {
            Ok(self.entries.lock().await.contains_key(job_id))
        }

        async fn save(&self, job_id: &str, summary: SavedSummary) -> Result<(), SavedStoreError> {
            if self.fail_keys.contains(job_id) {
                return Err(SavedStoreError::Backend("boom".to_string()));
            }
            let mut entries = self.entries.lock().await;
            if entries.contains_key(job_id) {
                return Err(SavedStoreError::Conflict);
            }
            entries.insert(job_id.to_string(), summary);
            Ok(())
        }

        async fn unsave(&self, job_id: &str) -> Result<(), SavedStoreError> {
            self.entries.lock().await.remove(job_id);
            Ok(())
        }

        async fn list_saved(&self) -> Result<Vec<(String, SavedSummary)>, SavedStoreError> {
            Ok(self
                .entries
                .lock()
                .await
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect())
        }
    }

    #[tokio::test]
    async fn save_unsave_round_trip_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let store = LocalSavedStore::open(path.clone()).await.unwrap();
        store.save("nurse-lagos", summary("Nurse")).await.unwrap();
        assert!(store.is_saved("nurse-lagos").await.unwrap());

        // A second open sees the persisted entry.
        let reopened = LocalSavedStore::open(path).await.unwrap();
        assert!(reopened.is_saved("nurse-lagos").await.unwrap());

        reopened.unsave("nurse-lagos").await.unwrap();
        assert!(!reopened.is_saved("nurse-lagos").await.unwrap());
    }

    #[tokio::test]
    async fn double_save_is_a_conflict() {
        let (_dir, store) = local_with(&["a"]).await;
        let err = store.save("a", summary("A")).await.unwrap_err();
        assert!(matches!(err, SavedStoreError::Conflict));
    }

    #[tokio::test]
    async fn migration_moves_everything_and_clears_local() {
        let (_dir, local) = local_with(&["a", "b"]).await;
        let remote = MemRemote::new(&[]);

        let migrated = migrate_local_to_remote(&local, &remote, "user1").await.unwrap();
        assert_eq!(migrated, 2);
        assert!(remote.is_saved("user1::a").await.unwrap());
        assert!(remote.is_saved("user1::b").await.unwrap());
        assert!(local.list_saved().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn migration_is_idempotent() {
        let (_dir, local) = local_with(&["a"]).await;
        let remote = MemRemote::new(&[]);

        migrate_local_to_remote(&local, &remote, "user1").await.unwrap();
        // Same entry saved locally again, then migrated again: the conflict
        // is a no-op, not a duplicate and not an error.
        local.save("a", summary("a")).await.unwrap();
        let migrated = migrate_local_to_remote(&local, &remote, "user1").await.unwrap();
        assert_eq!(migrated, 0);
        assert_eq!(remote.list_saved().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn local_clears_even_when_some_remote_writes_fail() {
        let (_dir, local) = local_with(&["a", "b", "c"]).await;
        let remote = MemRemote::new(&["user1::b"]);

        let migrated = migrate_local_to_remote(&local, &remote, "user1").await.unwrap();
        assert_eq!(migrated, 2);
        assert!(!remote.is_saved("user1::b").await.unwrap());
        // Every entry got its attempt, so local is cleared regardless.
        assert!(local.list_saved().await.unwrap().is_empty());
    }
}
