//! Local stand-in for the blog REST API, so the admin panel can be run and
//! tested without the hosted service.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::models::PostPayload;
use crate::services::{ApiError, InMemoryPostsService};

#[derive(Clone)]
pub struct ApiState {
    pub store: InMemoryPostsService,
    /// Required bearer token for mutations. `None` accepts any caller.
    pub api_token: Option<String>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", put(update_post).delete(delete_post))
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({ "status": "error", "message": message.into() })),
    )
        .into_response()
}

fn api_error_response(err: ApiError) -> Response {
    let status = match err {
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::MissingPostId => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}

fn authorize(state: &ApiState, headers: &HeaderMap) -> Result<(), Response> {
    let Some(expected) = state.api_token.as_deref() else {
        return Ok(());
    };
    let Some(header) = headers.get(AUTHORIZATION) else {
        return Err(error_response(StatusCode::UNAUTHORIZED, "missing bearer token"));
    };
    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim());
    match token {
        Some(token) if token == expected => Ok(()),
        _ => Err(error_response(StatusCode::UNAUTHORIZED, "invalid token")),
    }
}

/// Malformed bodies get the same `{status, message}` shape as every other error.
fn read_payload(body: Result<Json<PostPayload>, JsonRejection>) -> Result<PostPayload, Response> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| error_response(rejection.status(), rejection.body_text()))
}

fn validate(payload: &PostPayload) -> Result<(), Response> {
    if payload.title.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "title is required"));
    }
    Ok(())
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    Json(json!({
        "service": "ok",
        "posts": state.store.list().len(),
        "timestamp": Utc::now()
    }))
}

async fn list_posts(State(state): State<ApiState>) -> impl IntoResponse {
    Json(state.store.list())
}

async fn create_post(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Result<Json<PostPayload>, JsonRejection>,
) -> Response {
    let payload = match authorize(&state, &headers).and_then(|_| read_payload(body)) {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("create post rejected");
            return rejection;
        }
    };
    if let Err(rejection) = validate(&payload) {
        warn!("create post rejected");
        return rejection;
    }
    let post = state.store.insert(&payload);
    info!(id = %post.id, title = %post.title, "post created");
    (
        StatusCode::CREATED,
        Json(json!({ "status": "ok", "post": post })),
    )
        .into_response()
}

async fn update_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<PostPayload>, JsonRejection>,
) -> Response {
    let payload = match authorize(&state, &headers).and_then(|_| read_payload(body)) {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(id = %id, "update post rejected");
            return rejection;
        }
    };
    if let Err(rejection) = validate(&payload) {
        warn!(id = %id, "update post rejected");
        return rejection;
    }
    match state.store.replace(&id, &payload) {
        Ok(post) => {
            info!(id = %id, "post updated");
            Json(json!({ "status": "ok", "post": post })).into_response()
        }
        Err(err) => api_error_response(err),
    }
}

async fn delete_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        warn!(id = %id, "delete post rejected");
        return rejection;
    }
    match state.store.remove(&id) {
        Ok(_) => {
            info!(id = %id, "post deleted");
            Json(json!({ "status": "ok", "id": id })).into_response()
        }
        Err(err) => api_error_response(err),
    }
}
