use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::option::AnswerOption;

/// The closed set of question kinds. Anything else is rejected at the
/// authoring boundary, so grading can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "question_type", rename_all = "snake_case")]
pub enum QuestionType {
    TrueFalse,
    Mcq,
    Text,
}

impl QuestionType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "true_false" => Some(Self::TrueFalse),
            "mcq" => Some(Self::Mcq),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrueFalse => "true_false",
            Self::Mcq => "mcq",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub context: String,
    pub qtype: QuestionType,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A question together with its full option set, as loaded for grading or
/// for rendering a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionWithOptions {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<AnswerOption>,
}

impl QuestionWithOptions {
    pub fn option_by_id(&self, option_id: i64) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// The canonical answer for a `text` question. Picks the lowest-id
    /// option so the result does not depend on load order; the validator
    /// guarantees at most one option exists for text questions anyway.
    pub fn answer_key(&self) -> Option<&AnswerOption> {
        self.options.iter().min_by_key(|o| o.id)
    }
}
