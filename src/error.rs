use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("content parse error: {0}")]
    ContentParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid answer value: {0:?} (expected yes or no)")]
    InvalidAnswerValue(String),

    #[error("invalid answer argument: {0:?} (expected <question-id>=<yes|no>)")]
    InvalidAnswerArg(String),

    #[error("invalid category: {0:?} (expected A, B or C)")]
    InvalidCategory(String),

    #[error("no answers provided")]
    NoAnswers,

    #[error("unknown question id: {0}")]
    UnknownQuestion(u32),

    #[error("duplicate answer for question {0}")]
    DuplicateAnswer(u32),

    #[error("duplicate question id in catalog: {0}")]
    DuplicateQuestion(u32),

    #[error("incomplete submission: missing answers for question(s) {}", join_ids(.missing))]
    IncompleteSubmission { missing: Vec<u32> },

    #[error("submission not found: {0}")]
    SubmissionNotFound(u64),

    #[error("refusing to reset without --yes")]
    ResetNotConfirmed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SurveyError {
    /// Errors caused by the submitted answers themselves rather than the
    /// environment; these map to the "rejected" exit code.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAnswerValue(_)
                | Self::InvalidAnswerArg(_)
                | Self::NoAnswers
                | Self::UnknownQuestion(_)
                | Self::DuplicateAnswer(_)
                | Self::IncompleteSubmission { .. }
        )
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SurveyError>;
