use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::quiz_dto::{CreateQuizPayload, UpdateQuizPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/quizzes",
    responses(
        (status = 200, description = "List of quizzes with their questions")
    )
)]
#[axum::debug_handler]
pub async fn list_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let quizzes = state.quiz_service.list().await?;
    Ok(Json(quizzes))
}

#[utoipa::path(
    post,
    path = "/api/v1/quizzes",
    request_body = CreateQuizPayload,
    responses(
        (status = 201, description = "Quiz created successfully"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_quiz(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuizPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let quiz = state.quiz_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(quiz)))
}

#[utoipa::path(
    get,
    path = "/api/v1/quizzes/{id}",
    params(
        ("id" = i64, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz with questions and options"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let quiz = state.quiz_service.get_detail(id).await?;
    Ok(Json(quiz))
}

#[utoipa::path(
    patch,
    path = "/api/v1/quizzes/{id}",
    params(
        ("id" = i64, Path, description = "Quiz ID")
    ),
    request_body = UpdateQuizPayload,
    responses(
        (status = 200, description = "Quiz updated successfully"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn update_quiz(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuizPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let quiz = state.quiz_service.update(id, payload).await?;
    Ok(Json(quiz))
}

#[utoipa::path(
    delete,
    path = "/api/v1/quizzes/{id}",
    params(
        ("id" = i64, Path, description = "Quiz ID")
    ),
    responses(
        (status = 204, description = "Quiz deleted successfully"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.quiz_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
