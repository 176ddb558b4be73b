use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::question_dto::{CreateQuestionPayload, OptionPayload, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::option::AnswerOption;
use crate::models::question::{Question, QuestionWithOptions};
use crate::services::validation_service::ValidationService;

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the question together with its option set, or nothing at all:
    /// the validator gates the write and question + options land in one
    /// transaction.
    pub async fn create(
        &self,
        quiz_id: i64,
        payload: CreateQuestionPayload,
    ) -> Result<QuestionWithOptions> {
        self.ensure_quiz_exists(quiz_id).await?;

        let qtype =
            ValidationService::validate_question(&payload.qtype, &payload.context, &payload.options)
                .map_err(Error::QuestionRules)?;

        let mut tx = self.pool.begin().await?;
        let question = sqlx::query_as::<_, Question>(
            r#"INSERT INTO questions (quiz_id, context, qtype) VALUES ($1, $2, $3) RETURNING *"#,
        )
        .bind(quiz_id)
        .bind(&payload.context)
        .bind(qtype)
        .fetch_one(&mut *tx)
        .await?;

        let options = insert_options(&mut tx, question.id, &payload.options).await?;
        tx.commit().await?;

        Ok(QuestionWithOptions { question, options })
    }

    /// Applies a partial update. The validator always sees the full candidate
    /// state: submitted fields merged over the persisted ones, and the
    /// replacement option set when one is supplied. A supplied option set
    /// replaces the persisted one wholesale (delete-all-then-recreate), never
    /// merges into it.
    pub async fn update(
        &self,
        quiz_id: i64,
        question_id: i64,
        payload: UpdateQuestionPayload,
    ) -> Result<QuestionWithOptions> {
        self.ensure_quiz_exists(quiz_id).await?;
        let existing = self.get_in_quiz(quiz_id, question_id).await?;

        let existing_options = sqlx::query_as::<_, AnswerOption>(
            r#"SELECT * FROM options WHERE question_id = $1 ORDER BY id"#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        let context = payload.context.unwrap_or(existing.context);
        let raw_qtype = payload
            .qtype
            .unwrap_or_else(|| existing.qtype.as_str().to_string());
        let candidate_options: Vec<OptionPayload> = match &payload.options {
            Some(replacement) => replacement.clone(),
            None => existing_options
                .iter()
                .map(|o| OptionPayload {
                    content: o.content.clone(),
                    correct: o.correct,
                })
                .collect(),
        };

        let qtype = ValidationService::validate_question(&raw_qtype, &context, &candidate_options)
            .map_err(Error::QuestionRules)?;

        let mut tx = self.pool.begin().await?;
        let question = sqlx::query_as::<_, Question>(
            r#"UPDATE questions SET context = $1, qtype = $2, updated_at = NOW() WHERE id = $3 RETURNING *"#,
        )
        .bind(&context)
        .bind(qtype)
        .bind(question_id)
        .fetch_one(&mut *tx)
        .await?;

        let options = match payload.options {
            Some(replacement) => {
                sqlx::query(r#"DELETE FROM options WHERE question_id = $1"#)
                    .bind(question_id)
                    .execute(&mut *tx)
                    .await?;
                insert_options(&mut tx, question_id, &replacement).await?
            }
            None => existing_options,
        };
        tx.commit().await?;

        Ok(QuestionWithOptions { question, options })
    }

    /// Options and answers referencing the question go with it via ON DELETE
    /// CASCADE.
    pub async fn delete(&self, quiz_id: i64, question_id: i64) -> Result<()> {
        self.ensure_quiz_exists(quiz_id).await?;

        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1 AND quiz_id = $2"#)
            .bind(question_id)
            .bind(quiz_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Question not found".to_string()));
        }
        Ok(())
    }

    async fn get_in_quiz(&self, quiz_id: i64, question_id: i64) -> Result<Question> {
        sqlx::query_as::<_, Question>(r#"SELECT * FROM questions WHERE id = $1 AND quiz_id = $2"#)
            .bind(question_id)
            .bind(quiz_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Question not found".to_string()))
    }

    async fn ensure_quiz_exists(&self, quiz_id: i64) -> Result<()> {
        let found = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM quizzes WHERE id = $1"#)
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        if found == 0 {
            return Err(Error::NotFound("Quiz not found".to_string()));
        }
        Ok(())
    }
}

async fn insert_options(
    tx: &mut Transaction<'_, Postgres>,
    question_id: i64,
    options: &[OptionPayload],
) -> Result<Vec<AnswerOption>> {
    let mut created = Vec::with_capacity(options.len());
    for option in options {
        let row = sqlx::query_as::<_, AnswerOption>(
            r#"INSERT INTO options (question_id, content, correct) VALUES ($1, $2, $3) RETURNING *"#,
        )
        .bind(question_id)
        .bind(&option.content)
        .bind(option.correct)
        .fetch_one(&mut **tx)
        .await?;
        created.push(row);
    }
    Ok(created)
}
