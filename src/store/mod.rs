pub mod json;
pub mod memory;

use crate::error::Result;
use crate::types::config::{StorageBackend, SurveyConfig};
use crate::types::survey::{NewSubmission, Submission};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::debug;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Append-only submission history. Submissions are never edited once
/// appended; `reset` is the only way to remove them.
pub trait SubmissionStore {
    fn append(&mut self, submission: NewSubmission) -> Result<Submission>;

    fn all(&self) -> Result<Vec<Submission>>;

    fn get(&self, id: u64) -> Result<Option<Submission>> {
        Ok(self.all()?.into_iter().find(|submission| submission.id == id))
    }

    fn reset(&mut self) -> Result<()>;

    fn last_updated(&self) -> Result<Option<DateTime<Utc>>>;
}

pub fn open_store(config: &SurveyConfig, root: &Path) -> Box<dyn SubmissionStore> {
    match config.storage.backend {
        StorageBackend::Json => {
            let path = root.join(&config.storage.path);
            debug!(path = %path.display(), "opening json submission store");
            Box::new(JsonFileStore::new(path))
        }
        StorageBackend::Memory => {
            debug!("opening in-memory submission store");
            Box::new(MemoryStore::default())
        }
    }
}

fn next_id(existing: &[Submission]) -> u64 {
    existing
        .iter()
        .map(|submission| submission.id)
        .max()
        .unwrap_or(0)
        + 1
}
