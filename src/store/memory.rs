use super::{next_id, SubmissionStore};
use crate::error::Result;
use crate::types::survey::{NewSubmission, Submission};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct MemoryStore {
    submissions: Vec<Submission>,
    last_updated: Option<DateTime<Utc>>,
}

impl SubmissionStore for MemoryStore {
    fn append(&mut self, submission: NewSubmission) -> Result<Submission> {
        let now = Utc::now();
        let stored = Submission {
            id: next_id(&self.submissions),
            timestamp: now,
            respondent: submission.respondent,
            answers: submission.answers,
        };
        self.submissions.push(stored.clone());
        self.last_updated = Some(now);
        Ok(stored)
    }

    fn all(&self) -> Result<Vec<Submission>> {
        Ok(self.submissions.clone())
    }

    fn reset(&mut self) -> Result<()> {
        self.submissions.clear();
        self.last_updated = Some(Utc::now());
        Ok(())
    }

    fn last_updated(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.last_updated)
    }
}
