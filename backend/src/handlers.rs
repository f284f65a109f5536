use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::{Todo, TodoCreate, TodoUpdate};
use crate::repository;
use crate::router::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ConfigResponse {
    db_path: String,
    env_db_path: Option<String>,
}

/// Path ids arrive as raw text; anything that is not a positive integer is a
/// validation failure rather than a routing miss.
fn parse_todo_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiError::Validation(format!(
            "todo id must be a positive integer, got '{raw}'"
        ))),
    }
}

/// Repository calls do synchronous SQLite work, so they run on the blocking
/// pool instead of a runtime worker.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Internal(format!("blocking task join failed: {err}")))?
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { message: "Healthy" })
}

#[instrument(skip(state))]
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();
    Json(ConfigResponse {
        db_path: config.db_path.display().to_string(),
        env_db_path: config.env_db_path.clone(),
    })
}

#[instrument(skip(state))]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let db_path = state.db_path().to_path_buf();
    let todos = run_blocking(move || repository::list_todos(&db_path)).await?;
    Ok(Json(todos))
}

#[instrument(skip(state, payload))]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload?;
    if input.title.trim().is_empty() {
        return Err(ApiError::Validation("Title cannot be empty".to_string()));
    }

    let db_path = state.db_path().to_path_buf();
    let todo = run_blocking(move || {
        repository::create_todo(
            &db_path,
            &input.title,
            input.description.as_deref().unwrap_or(""),
            input.completed,
        )
    })
    .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_todo_id(&id)?;
    let db_path = state.db_path().to_path_buf();
    let todo = run_blocking(move || repository::get_todo(&db_path, id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

#[instrument(skip(state, payload))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoUpdate>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_todo_id(&id)?;
    let Json(fields) = payload?;
    if matches!(&fields.title, Some(title) if title.trim().is_empty()) {
        return Err(ApiError::Validation("Title cannot be empty".to_string()));
    }

    let db_path = state.db_path().to_path_buf();
    let todo = run_blocking(move || repository::update_todo(&db_path, id, &fields))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_todo_id(&id)?;
    let db_path = state.db_path().to_path_buf();
    let deleted = run_blocking(move || repository::delete_todo(&db_path, id)).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
