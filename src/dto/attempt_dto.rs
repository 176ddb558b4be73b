use serde::{Deserialize, Serialize};

use crate::dto::quiz_dto::{QuizBrief, QuizDetail};
use crate::models::answer::Answer;
use crate::models::attempt::Attempt;

/// One submitted answer. For `true_false`/`mcq` questions `response` carries
/// the selected option's id as text; for `text` questions the literal answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub response: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttemptPayload {
    pub quiz_id: i64,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptListQuery {
    pub quiz_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptDetail {
    #[serde(flatten)]
    pub attempt: Attempt,
    pub answers: Vec<Answer>,
}

/// Submission result: the stored attempt plus the figures the respondent
/// sees. Percentage, if wanted, is a presentation concern built from `score`
/// and `total_questions`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAttemptResponse {
    pub attempt: AttemptDetail,
    pub score: i32,
    pub total_questions: usize,
    pub quiz: QuizBrief,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptShowResponse {
    #[serde(flatten)]
    pub attempt: AttemptDetail,
    pub quiz: QuizDetail,
}
