use crate::types::scoring::percentage;
use crate::types::survey::{AnswerValue, Category, QuestionCatalog, Submission};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStats {
    pub id: u32,
    pub text: String,
    pub category: Category,
    pub reverse_scored: bool,
    pub yes: u64,
    pub no: u64,
    pub total: u64,
    pub yes_percentage: f64,
    pub no_percentage: f64,
}

/// Raw yes/no counts per question, in catalog order. Reverse scoring is not
/// applied: these are the values respondents actually chose.
pub fn question_stats(submissions: &[Submission], catalog: &QuestionCatalog) -> Vec<QuestionStats> {
    let mut counts: HashMap<u32, (u64, u64)> = HashMap::new();
    for answer in submissions.iter().flat_map(|submission| &submission.answers) {
        let entry = counts.entry(answer.question_id).or_default();
        match answer.value {
            AnswerValue::Yes => entry.0 += 1,
            AnswerValue::No => entry.1 += 1,
        }
    }

    catalog
        .iter()
        .map(|question| {
            let (yes, no) = counts.get(&question.id).copied().unwrap_or_default();
            let total = yes + no;
            QuestionStats {
                id: question.id,
                text: question.text.clone(),
                category: question.category,
                reverse_scored: question.reverse_scored,
                yes,
                no,
                total,
                yes_percentage: percentage(yes, total),
                no_percentage: percentage(no, total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{answer, small_catalog, submission};

    #[test]
    fn stats_use_raw_values_in_catalog_order() {
        let catalog = small_catalog();
        let subs = vec![
            submission(
                1,
                vec![
                    answer(&catalog, 2, AnswerValue::Yes),
                    answer(&catalog, 1, AnswerValue::Yes),
                ],
            ),
            submission(2, vec![answer(&catalog, 2, AnswerValue::Yes)]),
            submission(3, vec![answer(&catalog, 2, AnswerValue::No)]),
        ];

        let stats = question_stats(&subs, &catalog);
        assert_eq!(stats.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        // q2 is reverse-scored but stats report what was chosen
        let q2 = &stats[1];
        assert_eq!((q2.yes, q2.no, q2.total), (2, 1, 3));
        assert_eq!(q2.yes_percentage, 66.7);
        assert_eq!(q2.no_percentage, 33.3);

        let q3 = &stats[2];
        assert_eq!(q3.total, 0);
        assert_eq!(q3.yes_percentage, 0.0);
    }
}
