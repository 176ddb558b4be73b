use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{Question, QuestionWithOptions};
use crate::models::quiz::Quiz;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuizPayload {
    #[validate(length(min = 1))]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuizPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
}

/// Listing row: the quiz with its questions, options omitted.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<Question>,
}

/// Full rendering of one quiz, as served to the authoring UI.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<QuestionWithOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizBrief {
    pub id: i64,
    pub title: String,
}

impl From<Quiz> for QuizBrief {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
        }
    }
}
