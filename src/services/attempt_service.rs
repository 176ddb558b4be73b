use std::collections::{HashMap, HashSet};

use sqlx::PgPool;

use crate::dto::attempt_dto::{
    AttemptDetail, AttemptShowResponse, CreateAttemptPayload, SubmitAttemptResponse,
};
use crate::dto::quiz_dto::{QuizBrief, QuizDetail};
use crate::error::{Error, Result};
use crate::models::answer::Answer;
use crate::models::attempt::Attempt;
use crate::models::option::AnswerOption;
use crate::models::question::{Question, QuestionWithOptions};
use crate::models::quiz::Quiz;
use crate::services::grading_service::GradingService;

#[derive(Clone)]
pub struct AttemptService {
    pool: PgPool,
}

impl AttemptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records a submission: stores the attempt with its answers, grades them
    /// against the quiz as it exists right now, and stores the score. One
    /// shot — later edits to the quiz never re-trigger grading.
    pub async fn submit(&self, payload: CreateAttemptPayload) -> Result<SubmitAttemptResponse> {
        let quiz = sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(payload.quiz_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Quiz not found".to_string()))?;

        let questions = self.load_questions(quiz.id).await?;

        // Answers naming a question outside this quiz could never score and
        // would dangle once that other quiz changes, so they are dropped up
        // front instead of stored.
        let quiz_question_ids: HashSet<i64> = questions.iter().map(|q| q.question.id).collect();
        let (accepted, foreign): (Vec<_>, Vec<_>) = payload
            .answers
            .into_iter()
            .partition(|a| quiz_question_ids.contains(&a.question_id));
        if !foreign.is_empty() {
            tracing::warn!(
                quiz_id = quiz.id,
                discarded = foreign.len(),
                "discarding answers that reference questions outside the quiz"
            );
        }

        let mut tx = self.pool.begin().await?;
        let attempt = sqlx::query_as::<_, Attempt>(
            r#"INSERT INTO attempts (quiz_id, score) VALUES ($1, 0) RETURNING *"#,
        )
        .bind(quiz.id)
        .fetch_one(&mut *tx)
        .await?;

        let mut answers = Vec::with_capacity(accepted.len());
        for submitted in &accepted {
            let answer = sqlx::query_as::<_, Answer>(
                r#"INSERT INTO answers (attempt_id, question_id, response) VALUES ($1, $2, $3) RETURNING *"#,
            )
            .bind(attempt.id)
            .bind(submitted.question_id)
            .bind(&submitted.response)
            .fetch_one(&mut *tx)
            .await?;
            answers.push(answer);
        }

        let score = GradingService::score_attempt(&questions, &answers);
        let attempt = sqlx::query_as::<_, Attempt>(
            r#"UPDATE attempts SET score = $1, updated_at = NOW() WHERE id = $2 RETURNING *"#,
        )
        .bind(score)
        .bind(attempt.id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::info!(
            attempt_id = attempt.id,
            quiz_id = quiz.id,
            score,
            total_questions = questions.len(),
            "attempt graded"
        );

        Ok(SubmitAttemptResponse {
            attempt: AttemptDetail { attempt, answers },
            score,
            total_questions: questions.len(),
            quiz: QuizBrief::from(quiz),
        })
    }

    pub async fn get_by_id(&self, attempt_id: i64) -> Result<AttemptShowResponse> {
        let attempt = sqlx::query_as::<_, Attempt>(r#"SELECT * FROM attempts WHERE id = $1"#)
            .bind(attempt_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Attempt not found".to_string()))?;

        let answers =
            sqlx::query_as::<_, Answer>(r#"SELECT * FROM answers WHERE attempt_id = $1 ORDER BY id"#)
                .bind(attempt_id)
                .fetch_all(&self.pool)
                .await?;

        let quiz = sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(attempt.quiz_id)
            .fetch_one(&self.pool)
            .await?;
        let questions = self.load_questions(quiz.id).await?;

        Ok(AttemptShowResponse {
            attempt: AttemptDetail { attempt, answers },
            quiz: QuizDetail { quiz, questions },
        })
    }

    pub async fn list(&self, quiz_id: Option<i64>) -> Result<Vec<AttemptDetail>> {
        let attempts = sqlx::query_as::<_, Attempt>(
            r#"
            SELECT * FROM attempts
            WHERE ($1::bigint IS NULL OR quiz_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let attempt_ids: Vec<i64> = attempts.iter().map(|a| a.id).collect();
        let answers = sqlx::query_as::<_, Answer>(
            r#"SELECT * FROM answers WHERE attempt_id = ANY($1) ORDER BY id"#,
        )
        .bind(&attempt_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i64, Vec<Answer>> = HashMap::new();
        for answer in answers {
            grouped.entry(answer.attempt_id).or_default().push(answer);
        }

        Ok(attempts
            .into_iter()
            .map(|attempt| AttemptDetail {
                answers: grouped.remove(&attempt.id).unwrap_or_default(),
                attempt,
            })
            .collect())
    }

    async fn load_questions(&self, quiz_id: i64) -> Result<Vec<QuestionWithOptions>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"SELECT * FROM questions WHERE quiz_id = $1 ORDER BY id"#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let options = sqlx::query_as::<_, AnswerOption>(
            r#"
            SELECT o.* FROM options o
            JOIN questions q ON o.question_id = q.id
            WHERE q.quiz_id = $1
            ORDER BY o.id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i64, Vec<AnswerOption>> = HashMap::new();
        for option in options {
            grouped.entry(option.question_id).or_default().push(option);
        }

        Ok(questions
            .into_iter()
            .map(|question| QuestionWithOptions {
                options: grouped.remove(&question.id).unwrap_or_default(),
                question,
            })
            .collect())
    }
}
