use super::reverse::apply_reverse_scoring;
use crate::types::scoring::CategoryTallies;
use crate::types::survey::{QuestionCatalog, Submission};
use tracing::debug;

/// Aggregate yes/no/total counts per category over every submission.
///
/// Answers whose question id is not in `catalog` are skipped. The category
/// comes from the catalog, not from the answer's stored copy.
pub fn tally_categories(submissions: &[Submission], catalog: &QuestionCatalog) -> CategoryTallies {
    let mut tallies = CategoryTallies::default();
    for submission in submissions {
        for answer in &submission.answers {
            let Some(question) = catalog.get(answer.question_id) else {
                debug!(
                    submission = submission.id,
                    question = answer.question_id,
                    "skipping answer for unknown question"
                );
                continue;
            };
            if answer.category != question.category {
                debug!(
                    submission = submission.id,
                    question = question.id,
                    stored = %answer.category,
                    current = %question.category,
                    "answer category differs from catalog; using catalog"
                );
            }
            tallies
                .get_mut(question.category)
                .record(apply_reverse_scoring(answer, question));
        }
    }
    tallies
}
