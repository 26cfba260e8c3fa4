use super::reverse::apply_reverse_scoring;
use crate::types::scoring::{CategoryScores, DominantResult};
use crate::types::survey::{Answer, QuestionCatalog};

/// Dominant category (or tied set) for a single respondent.
///
/// Only answers whose effective value is "yes" score. Ties are returned as
/// is; with no "yes" anywhere all three categories tie at zero.
pub fn dominant_category(answers: &[Answer], catalog: &QuestionCatalog) -> DominantResult {
    let mut scores = CategoryScores::default();
    for answer in answers {
        let Some(question) = catalog.get(answer.question_id) else {
            continue;
        };
        if apply_reverse_scoring(answer, question).is_yes() {
            scores.increment(question.category);
        }
    }
    DominantResult::from_scores(scores)
}
