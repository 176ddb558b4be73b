pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    attempt_service::AttemptService, question_service::QuestionService, quiz_service::QuizService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub quiz_service: QuizService,
    pub question_service: QuestionService,
    pub attempt_service: AttemptService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let quiz_service = QuizService::new(pool.clone());
        let question_service = QuestionService::new(pool.clone());
        let attempt_service = AttemptService::new(pool.clone());

        Self {
            pool,
            quiz_service,
            question_service,
            attempt_service,
        }
    }
}
