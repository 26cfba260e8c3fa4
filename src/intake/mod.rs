pub mod parse;

use crate::error::{Result, SurveyError};
use crate::types::survey::{Answer, QuestionCatalog};
use parse::RawAnswer;
use std::collections::BTreeMap;
use tracing::debug;

/// Turns raw answers into a complete, catalog-ordered answer set.
///
/// Exactly one answer per catalog question is required; unknown ids,
/// repeated ids and missing questions are all rejected.
pub fn build_answers(raw: &[RawAnswer], catalog: &QuestionCatalog) -> Result<Vec<Answer>> {
    if raw.is_empty() {
        return Err(SurveyError::NoAnswers);
    }

    let mut by_id = BTreeMap::new();
    for item in raw {
        let question = catalog
            .get(item.question_id)
            .ok_or(SurveyError::UnknownQuestion(item.question_id))?;
        let value = item.value()?;
        if by_id
            .insert(question.id, Answer::new(question.id, question.category, value))
            .is_some()
        {
            return Err(SurveyError::DuplicateAnswer(question.id));
        }
    }

    let missing = catalog
        .ids()
        .filter(|id| !by_id.contains_key(id))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(SurveyError::IncompleteSubmission { missing });
    }

    debug!(answers = by_id.len(), "submission passed intake");
    Ok(by_id.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::survey::{AnswerValue, Category, Question};

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(
            [(1, Category::A), (2, Category::B), (3, Category::C)]
                .into_iter()
                .map(|(id, category)| Question {
                    id,
                    text: format!("q{id}"),
                    category,
                    reverse_scored: id == 2,
                })
                .collect(),
        )
        .expect("catalog should build")
    }

    fn raw(id: u32, answer: &str) -> RawAnswer {
        RawAnswer {
            question_id: id,
            answer: answer.to_string(),
        }
    }

    #[test]
    fn complete_submission_is_sorted_and_categorised_from_catalog() {
        let answers = build_answers(&[raw(3, "no"), raw(1, "yes"), raw(2, "YES")], &catalog())
            .expect("complete submission should pass");
        assert_eq!(
            answers,
            vec![
                Answer::new(1, Category::A, AnswerValue::Yes),
                Answer::new(2, Category::B, AnswerValue::Yes),
                Answer::new(3, Category::C, AnswerValue::No),
            ]
        );
    }

    #[test]
    fn empty_submission_is_rejected() {
        assert!(matches!(
            build_answers(&[], &catalog()),
            Err(SurveyError::NoAnswers)
        ));
    }

    #[test]
    fn partial_submission_lists_missing_questions() {
        let err = build_answers(&[raw(2, "no")], &catalog()).expect_err("partial should fail");
        match err {
            SurveyError::IncompleteSubmission { missing } => assert_eq!(missing, vec![1, 3]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_and_duplicate_ids_are_rejected() {
        let err = build_answers(&[raw(1, "yes"), raw(9, "yes")], &catalog())
            .expect_err("unknown id should fail");
        assert!(matches!(err, SurveyError::UnknownQuestion(9)));

        let err = build_answers(
            &[raw(1, "yes"), raw(1, "no"), raw(2, "no"), raw(3, "no")],
            &catalog(),
        )
        .expect_err("duplicate should fail");
        assert!(matches!(err, SurveyError::DuplicateAnswer(1)));
    }

    #[test]
    fn malformed_value_is_rejected() {
        let err = build_answers(&[raw(1, "sometimes"), raw(2, "no"), raw(3, "no")], &catalog())
            .expect_err("bad value should fail");
        assert!(matches!(err, SurveyError::InvalidAnswerValue(_)));
    }
}
