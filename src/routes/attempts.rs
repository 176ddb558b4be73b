use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::attempt_dto::{AttemptListQuery, CreateAttemptPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_attempts(
    State(state): State<AppState>,
    Query(query): Query<AttemptListQuery>,
) -> Result<impl IntoResponse> {
    let attempts = state.attempt_service.list(query.quiz_id).await?;
    Ok(Json(attempts))
}

#[axum::debug_handler]
pub async fn get_attempt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let attempt = state.attempt_service.get_by_id(id).await?;
    Ok(Json(attempt))
}

#[axum::debug_handler]
pub async fn create_attempt(
    State(state): State<AppState>,
    Json(payload): Json<CreateAttemptPayload>,
) -> Result<impl IntoResponse> {
    let result = state.attempt_service.submit(payload).await?;
    Ok((StatusCode::CREATED, Json(result)))
}
