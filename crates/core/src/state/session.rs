//! # Session Persistence
//!
//! Durable session records: one JSON file per initiative id, rewritten in
//! full after every mutating operation. Records are write-only artifacts for
//! external inspection - there is no load path, and a restarted process
//! cannot resume an initiative.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::state::initiative::Initiative;
use crate::state::io;

/// Failures while writing a session record
#[derive(Debug, Error)]
pub enum SessionError {
    /// Serializing the initiative failed
    #[error("failed to serialize initiative {id}")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the record to disk failed
    #[error("failed to write session record {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Keyed durable storage for initiative session records
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| SessionError::Write {
                path: dir.clone(),
                source,
            })?;
        Ok(Self { dir })
    }

    /// Open the default store under the runtime directory
    pub async fn open_default() -> Result<Self, SessionError> {
        Self::open(io::sessions_path()).await
    }

    /// Path of the record for an initiative id
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Write the full state of the initiative, overwriting any prior record
    ///
    /// The record is written to a temp file and renamed into place so a crash
    /// mid-write cannot corrupt the previous record.
    pub async fn save(&self, initiative: &Initiative) -> Result<PathBuf, SessionError> {
        let json =
            serde_json::to_string_pretty(initiative).map_err(|source| SessionError::Encode {
                id: initiative.id.clone(),
                source,
            })?;

        let path = self.record_path(&initiative.id);
        let tmp = path.with_extension("json.tmp");

        write_file(&tmp, &json).await?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|source| SessionError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(id = %initiative.id, path = %path.display(), "session record written");
        Ok(path)
    }
}

async fn write_file(path: &Path, content: &str) -> Result<(), SessionError> {
    fs::write(path, content)
        .await
        .map_err(|source| SessionError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeploymentCatalog;
    use chrono::DateTime;
    use tempfile::TempDir;

    async fn store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_round_trip() {
        let (_dir, store) = store().await;
        let catalog = DeploymentCatalog::builtin();
        let mut initiative = Initiative::from_catalog(&catalog, "demo", "round trip");

        // Mutate a bit so the record is not all-defaults
        initiative.agents[0].activate();

        let path = store.save(&initiative).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let restored: Initiative = serde_json::from_str(&raw).unwrap();

        assert_eq!(restored, initiative);
    }

    #[tokio::test]
    async fn test_record_format() {
        let (_dir, store) = store().await;
        let catalog = DeploymentCatalog::builtin();
        let initiative = Initiative::from_catalog(&catalog, "demo", "");

        let path = store.save(&initiative).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(record["id"], initiative.id);
        assert_eq!(record["status"], "initialized");
        assert_eq!(record["agents"].as_array().unwrap().len(), 6);
        assert_eq!(record["agents"][0]["status"], "pending");

        // Timestamps serialize as RFC 3339 strings
        let created_at = record["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
        let last_update = record["agents"][0]["last_update"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(last_update).is_ok());
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_record() {
        let (dir, store) = store().await;
        let catalog = DeploymentCatalog::builtin();
        let mut initiative = Initiative::from_catalog(&catalog, "demo", "");

        store.save(&initiative).await.unwrap();
        initiative.agents[0].activate();
        store.save(&initiative).await.unwrap();

        // One record per id, no temp file left behind
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);

        let raw = std::fs::read_to_string(store.record_path(&initiative.id)).unwrap();
        let restored: Initiative = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored.agents[0].progress, 0.1);
    }

    #[tokio::test]
    async fn test_record_path_is_keyed_by_id() {
        let (_dir, store) = store().await;
        let path = store.record_path("initiative-42-0");
        assert!(path.ends_with("initiative-42-0.json"));
    }
}
