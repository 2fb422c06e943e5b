//! Draft persistence.
//!
//! Keeps unsent snapshots in a single JSON file keyed by form id, so
//! values entered before a failed submission survive a restart. A missing
//! file reads as an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::submitter::Submission;

type Drafts = BTreeMap<String, Submission>;

/// JSON-file-backed draft store.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    /// Store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the draft of `form_id`, replacing any previous one.
    pub fn save(&self, form_id: &str, draft: &Submission) -> Result<(), StorageError> {
        let mut drafts = self.read_all()?;
        drafts.insert(form_id.to_owned(), draft.clone());
        self.write_all(&drafts)?;
        tracing::debug!(form = form_id, path = %self.path.display(), "draft saved");
        Ok(())
    }

    /// Loads the draft of `form_id`, if one is stored.
    pub fn load(&self, form_id: &str) -> Result<Option<Submission>, StorageError> {
        Ok(self.read_all()?.remove(form_id))
    }

    /// Removes the draft of `form_id`. Returns whether one existed.
    pub fn remove(&self, form_id: &str) -> Result<bool, StorageError> {
        let mut drafts = self.read_all()?;
        if drafts.remove(form_id).is_none() {
            return Ok(false);
        }
        self.write_all(&drafts)?;
        tracing::debug!(form = form_id, "draft removed");
        Ok(true)
    }

    fn read_all(&self) -> Result<Drafts, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Drafts::new()),
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "failed to read drafts");
                return Err(err.into());
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "malformed drafts file");
            err.into()
        })
    }

    fn write_all(&self, drafts: &Drafts) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(drafts)?;
        fs::write(&self.path, json).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "failed to write drafts");
            err.into()
        })
    }
}
