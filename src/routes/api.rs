// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and exercise log routes.

use crate::error::{AppError, Result};
use crate::models::{
    CreateUserForm, ExerciseForm, ExerciseLog, ExerciseReceipt, LogParams, UserSummary,
};
use crate::routes::extract::FormOrJson;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_log))
}

// ─── Users ───────────────────────────────────────────────────

async fn create_user(
    State(state): State<Arc<AppState>>,
    FormOrJson(form): FormOrJson<CreateUserForm>,
) -> Result<Json<UserSummary>> {
    state.users.create_user(form).await.map(Json)
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserSummary>>> {
    state.users.list_users().await.map(Json)
}

// ─── Exercises ───────────────────────────────────────────────

async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    FormOrJson(form): FormOrJson<ExerciseForm>,
) -> Result<Json<ExerciseReceipt>> {
    tracing::debug!(user_id = %user_id, "Adding exercise");
    state.exercise_log.append_exercise(&user_id, form).await.map(Json)
}

async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    query: std::result::Result<Query<LogParams>, QueryRejection>,
) -> Result<Json<ExerciseLog>> {
    let Query(params) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    tracing::debug!(
        user_id = %user_id,
        from = ?params.from,
        to = ?params.to,
        limit = ?params.limit,
        "Fetching exercise log"
    );
    state.exercise_log.get_log(&user_id, params).await.map(Json)
}
