use crate::types::survey::{Answer, AnswerValue, Question};

/// Effective value of `answer` once the question's reverse-scoring flag is
/// applied. The caller must pass the question matching `answer.question_id`.
pub fn apply_reverse_scoring(answer: &Answer, question: &Question) -> AnswerValue {
    debug_assert_eq!(answer.question_id, question.id);
    if question.reverse_scored {
        answer.value.negate()
    } else {
        answer.value
    }
}
