use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{BlogPost, PostPayload};

pub mod memory;
pub mod requests;
pub mod rest;

pub use memory::InMemoryPostsService;
pub use requests::{ApiRequest, Method};
pub use rest::{ApiResponse, HttpTransport, RestPostsService, StaticToken, TokenSource};

pub type ServiceResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("no post selected")]
    MissingPostId,
    #[error("post {0} not found")]
    NotFound(String),
}

/// The blog API as the admin panel uses it.
#[async_trait(?Send)]
pub trait PostsService {
    async fn list_posts(&self) -> ServiceResult<Vec<BlogPost>>;
    async fn create_post(&self, payload: &PostPayload) -> ServiceResult<()>;
    async fn update_post(&self, id: &str, payload: &PostPayload) -> ServiceResult<()>;
    async fn delete_post(&self, id: &str) -> ServiceResult<()>;
}

/// Text shown to the user for a failed call. Prefers the `message`, `error` or
/// `detail` field of a JSON error body, then the raw body, then the status line.
pub fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { status, body } => {
            if let Ok(value) = serde_json::from_str::<Value>(body) {
                for key in ["message", "error", "detail"] {
                    if let Some(text) = value.get(key).and_then(Value::as_str) {
                        if !text.trim().is_empty() {
                            return text.to_string();
                        }
                    }
                }
            }
            let body = body.trim();
            if body.is_empty() {
                format!("Request failed with status code {status}")
            } else {
                body.to_string()
            }
        }
        other => other.to_string(),
    }
}
