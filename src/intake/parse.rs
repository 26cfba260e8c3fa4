use crate::error::{Result, SurveyError};
use crate::types::survey::AnswerValue;
use serde::Deserialize;
use std::path::Path;

/// One answer as submitted, before validation against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAnswer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub answer: String,
}

impl RawAnswer {
    pub fn value(&self) -> Result<AnswerValue> {
        self.answer.parse()
    }
}

/// Parses `<question-id>=<yes|no>`.
pub fn parse_answer_arg(arg: &str) -> Result<RawAnswer> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| SurveyError::InvalidAnswerArg(arg.to_string()))?;
    let question_id = id
        .trim()
        .parse::<u32>()
        .map_err(|_| SurveyError::InvalidAnswerArg(arg.to_string()))?;
    let answer = value.trim().to_string();
    // fail fast on the value too, so the error names the bad value
    answer.parse::<AnswerValue>()?;
    Ok(RawAnswer {
        question_id,
        answer,
    })
}

/// Reads a JSON array of `{ "questionId": .., "answer": .. }` objects.
pub fn read_answers_file(path: &Path) -> Result<Vec<RawAnswer>> {
    if !path.exists() {
        return Err(SurveyError::PathNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
