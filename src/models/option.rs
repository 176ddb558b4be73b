use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A candidate answer for a question. For `true_false`/`mcq` questions the
/// respondent selects one of these by id; for `text` questions a single
/// option holds the canonical answer text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerOption {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
    pub correct: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
