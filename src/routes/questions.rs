use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::question_dto::{CreateQuestionPayload, UpdateQuestionPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.create(quiz_id, payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path((quiz_id, id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.update(quiz_id, id, payload).await?;
    Ok(Json(question))
}

#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path((quiz_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(quiz_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
