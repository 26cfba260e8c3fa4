use super::{next_id, SubmissionStore};
use crate::error::Result;
use crate::types::survey::{NewSubmission, Submission};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    #[serde(default)]
    responses: Vec<Submission>,
    #[serde(default)]
    total_responses: usize,
    #[serde(default, alias = "last_updated")]
    last_updated: Option<DateTime<Utc>>,
    /// Keys this store does not own, such as a `questions` snapshot, are
    /// written back untouched.
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Whole-history JSON document on disk.
///
/// Writers serialize on an exclusive lock held on a sibling `.lock` file for
/// the whole read-modify-write, and replace the document through a uniquely
/// named temp file and a rename, so a reader never sees a partial document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Blocks until this process owns the store. Released when the handle drops.
    fn lock(&self) -> Result<File> {
        fs::create_dir_all(self.dir())?;
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;
        lock.lock_exclusive()?;
        debug!(path = %self.lock_path().display(), "store lock acquired");
        Ok(lock)
    }

    fn load(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing; treating as empty");
            return Ok(StoreDocument::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(StoreDocument::default());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Callers must hold the lock from `lock()`.
    fn save(&self, document: &mut StoreDocument) -> Result<()> {
        document.total_responses = document.responses.len();
        document.last_updated = Some(Utc::now());
        let mut tmp = NamedTempFile::new_in(self.dir())?;
        serde_json::to_writer_pretty(&mut tmp, document)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SubmissionStore for JsonFileStore {
    fn append(&mut self, submission: NewSubmission) -> Result<Submission> {
        let _lock = self.lock()?;
        let mut document = self.load()?;
        let stored = Submission {
            id: next_id(&document.responses),
            timestamp: Utc::now(),
            respondent: submission.respondent,
            answers: submission.answers,
        };
        document.responses.push(stored.clone());
        self.save(&mut document)?;
        info!(
            id = stored.id,
            total = document.responses.len(),
            "submission recorded"
        );
        Ok(stored)
    }

    fn all(&self) -> Result<Vec<Submission>> {
        Ok(self.load()?.responses)
    }

    fn reset(&mut self) -> Result<()> {
        let _lock = self.lock()?;
        let mut document = self.load()?;
        document.responses.clear();
        self.save(&mut document)?;
        info!(path = %self.path.display(), "submission store reset");
        Ok(())
    }

    fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.load()?.last_updated)
    }
}
