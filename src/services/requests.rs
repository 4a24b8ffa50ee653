use serde_json::Value;

use crate::config::ApiConfig;
use crate::models::PostPayload;

use super::{ApiError, ServiceResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Transport-independent description of one call to the blog API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub include_credentials: bool,
}

impl ApiRequest {
    fn new(method: Method, url: String, token: &str) -> Self {
        let mut headers = Vec::new();
        if let Some(value) = authorization_value(token) {
            headers.push(("Authorization".to_string(), value));
        }
        Self {
            method,
            url,
            headers,
            body: None,
            include_credentials: true,
        }
    }

    fn json(mut self, body: Value) -> Self {
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

/// `Bearer <token>`; a token already carrying the scheme is passed through.
pub fn authorization_value(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let has_scheme = token
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("bearer "));
    if has_scheme {
        Some(token.to_string())
    } else {
        Some(format!("Bearer {token}"))
    }
}

pub fn list_posts(config: &ApiConfig, token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, config.url("/posts"), token)
}

pub fn create_post(config: &ApiConfig, token: &str, payload: &PostPayload) -> ServiceResult<ApiRequest> {
    let body = payload_json(payload)?;
    Ok(ApiRequest::new(Method::Post, config.url("/posts"), token).json(body))
}

pub fn update_post(
    config: &ApiConfig,
    token: &str,
    id: &str,
    payload: &PostPayload,
) -> ServiceResult<ApiRequest> {
    let url = post_url(config, id)?;
    let body = payload_json(payload)?;
    Ok(ApiRequest::new(Method::Put, url, token).json(body))
}

pub fn delete_post(config: &ApiConfig, token: &str, id: &str) -> ServiceResult<ApiRequest> {
    let url = post_url(config, id)?;
    Ok(ApiRequest::new(Method::Delete, url, token))
}

fn post_url(config: &ApiConfig, id: &str) -> ServiceResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::MissingPostId);
    }
    Ok(config.url(&format!("/posts/{id}")))
}

fn payload_json(payload: &PostPayload) -> ServiceResult<Value> {
    serde_json::to_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
}
