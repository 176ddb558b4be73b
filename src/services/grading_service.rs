use crate::models::answer::Answer;
use crate::models::question::{QuestionType, QuestionWithOptions};

pub struct GradingService;

impl GradingService {
    /// Number of correctly answered questions in an attempt, graded against
    /// the quiz snapshot the caller loaded. Each question contributes at most
    /// 1, so the result is always within `[0, questions.len()]`.
    ///
    /// Grading never fails: an unanswered question, an option id that does
    /// not resolve within the question, or a response that is not an id at
    /// all are all just "not correct".
    pub fn score_attempt(questions: &[QuestionWithOptions], answers: &[Answer]) -> i32 {
        let mut correct = 0;

        for question in questions {
            // Duplicate answers for one question can exist in storage; the
            // lowest id (the earliest submitted) is the one that counts.
            let answer = answers
                .iter()
                .filter(|a| a.question_id == question.question.id)
                .min_by_key(|a| a.id);

            let Some(answer) = answer else { continue };
            if Self::is_correct(question, answer) {
                correct += 1;
            }
        }

        correct
    }

    fn is_correct(question: &QuestionWithOptions, answer: &Answer) -> bool {
        let Some(response) = answer.response.as_deref() else {
            return false;
        };

        match question.question.qtype {
            QuestionType::TrueFalse | QuestionType::Mcq => parse_option_id(response)
                .and_then(|id| question.option_by_id(id))
                .map(|selected| selected.correct)
                .unwrap_or(false),
            QuestionType::Text => match question.answer_key() {
                Some(key) => comparison_form(response) == comparison_form(&key.content),
                // No answer key means the question is not auto-gradable.
                None => false,
            },
        }
    }
}

fn parse_option_id(response: &str) -> Option<i64> {
    response.trim().parse().ok()
}

fn comparison_form(text: &str) -> String {
    text.trim().to_lowercase()
}
