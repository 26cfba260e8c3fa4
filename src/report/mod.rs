pub mod json;
pub mod md;

use crate::error::{Result, SurveyError};
use crate::types::report::{QuestionList, ResultReport, StatsReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_stats(report: &StatsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SurveyError::Json),
        OutputFormat::Md => Ok(md::stats_markdown(report)),
    }
}

pub fn render_result(report: &ResultReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SurveyError::Json),
        OutputFormat::Md => Ok(md::result_markdown(report)),
    }
}

pub fn render_questions(list: &QuestionList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(list).map_err(SurveyError::Json),
        OutputFormat::Md => Ok(md::questions_markdown(list)),
    }
}
