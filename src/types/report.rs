use crate::content::StyleMessage;
use crate::scoring::QuestionStats;
use crate::types::scoring::{CategoryTallies, DominantResult};
use crate::types::survey::{Answer, Category, Question};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub total_responses: usize,
    pub category_scores: CategoryTallies,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub summary: SurveySummary,
    pub questions: Vec<QuestionStats>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultReport {
    pub submission_id: u64,
    pub summary: SurveySummary,
    pub your_answers: Vec<Answer>,
    pub dominant_category: DominantResult,
    pub message: StyleMessage,
    pub category_descriptions: BTreeMap<Category, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionList {
    pub survey: String,
    pub questions: Vec<Question>,
}
