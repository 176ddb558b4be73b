use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::quiz_dto::{CreateQuizPayload, QuizDetail, QuizSummary, UpdateQuizPayload};
use crate::error::{Error, Result};
use crate::models::option::AnswerOption;
use crate::models::question::{Question, QuestionWithOptions};
use crate::models::quiz::Quiz;

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateQuizPayload) -> Result<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(r#"INSERT INTO quizzes (title) VALUES ($1) RETURNING *"#)
            .bind(payload.title)
            .fetch_one(&self.pool)
            .await?;
        Ok(quiz)
    }

    pub async fn get_by_id(&self, quiz_id: i64) -> Result<Quiz> {
        sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(quiz_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Quiz not found".to_string()))
    }

    pub async fn get_detail(&self, quiz_id: i64) -> Result<QuizDetail> {
        let quiz = self.get_by_id(quiz_id).await?;

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

        let questions = questions
            .into_iter()
            .map(|question| QuestionWithOptions {
                options: grouped.remove(&question.id).unwrap_or_default(),
                question,
            })
            .collect();

        Ok(QuizDetail { quiz, questions })
    }

    pub async fn list(&self) -> Result<Vec<QuizSummary>> {
        let quizzes =
            sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes ORDER BY created_at DESC"#)
                .fetch_all(&self.pool)
                .await?;

        let quiz_ids: Vec<i64> = quizzes.iter().map(|q| q.id).collect();
        let questions = sqlx::query_as::<_, Question>(
            r#"SELECT * FROM questions WHERE quiz_id = ANY($1) ORDER BY id"#,
        )
        .bind(&quiz_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i64, Vec<Question>> = HashMap::new();
        for question in questions {
            grouped.entry(question.quiz_id).or_default().push(question);
        }

        Ok(quizzes
            .into_iter()
            .map(|quiz| QuizSummary {
                questions: grouped.remove(&quiz.id).unwrap_or_default(),
                quiz,
            })
            .collect())
    }

    pub async fn update(&self, quiz_id: i64, payload: UpdateQuizPayload) -> Result<Quiz> {
        let quiz = self.get_by_id(quiz_id).await?;
        let title = payload.title.unwrap_or(quiz.title);

        let quiz = sqlx::query_as::<_, Quiz>(
            r#"UPDATE quizzes SET title = $1, updated_at = NOW() WHERE id = $2 RETURNING *"#,
        )
        .bind(title)
        .bind(quiz_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(quiz)
    }

    /// Questions, options, attempts and answers go with the quiz via the
    /// foreign keys' ON DELETE CASCADE.
    pub async fn delete(&self, quiz_id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM quizzes WHERE id = $1"#)
            .bind(quiz_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Quiz not found".to_string()));
        }
        Ok(())
    }
}
