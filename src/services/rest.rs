use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::models::{BlogPost, PostPayload};

use super::requests::{self, ApiRequest};
use super::{ApiError, PostsService, ServiceResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a built request. The browser build uses `fetch`; tests plug in routers or recorders.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> ServiceResult<ApiResponse>;
}

/// Where the bearer token comes from. Read on every call so a fresh login is picked up.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct RestPostsService<T, K> {
    config: ApiConfig,
    transport: T,
    tokens: K,
}

impl<T: HttpTransport, K: TokenSource> RestPostsService<T, K> {
    pub fn new(config: ApiConfig, transport: T, tokens: K) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    fn token(&self) -> String {
        self.tokens.token().unwrap_or_default()
    }

    async fn execute(&self, request: ApiRequest) -> ServiceResult<ApiResponse> {
        let method = request.method.as_str();
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        if !response.ok() {
            warn!(method, url = %url, status = response.status, "blog API rejected request");
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        info!(method, url = %url, status = response.status, "blog API request succeeded");
        Ok(response)
    }
}

fn parse_json<T: DeserializeOwned>(response: &ApiResponse) -> ServiceResult<T> {
    serde_json::from_str(&response.body)
        .map_err(|err| ApiError::Decode(format!("{err}, raw response: {}", response.body)))
}

#[async_trait(?Send)]
impl<T: HttpTransport, K: TokenSource> PostsService for RestPostsService<T, K> {
    async fn list_posts(&self) -> ServiceResult<Vec<BlogPost>> {
        let request = requests::list_posts(&self.config, &self.token());
        let response = self.execute(request).await?;
        parse_json(&response)
    }

    async fn create_post(&self, payload: &PostPayload) -> ServiceResult<()> {
        let request = requests::create_post(&self.config, &self.token(), payload)?;
        self.execute(request).await.map(|_| ())
    }

    async fn update_post(&self, id: &str, payload: &PostPayload) -> ServiceResult<()> {
        let request = requests::update_post(&self.config, &self.token(), id, payload)?;
        self.execute(request).await.map(|_| ())
    }

    async fn delete_post(&self, id: &str) -> ServiceResult<()> {
        let request = requests::delete_post(&self.config, &self.token(), id)?;
        self.execute(request).await.map(|_| ())
    }
}
