#![cfg(feature = "server")]

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use tower::ServiceExt;

use blog_site::config::ApiConfig;
use blog_site::controller::PostsModal;
use blog_site::mock_api::{ApiState, router};
use blog_site::modal::ModalKind;
use blog_site::services::{
    ApiError, ApiRequest, ApiResponse, HttpTransport, InMemoryPostsService, PostsService,
    RestPostsService, ServiceResult, StaticToken, error_message,
};

/// Feeds requests straight into the router, no sockets involved.
#[derive(Clone)]
struct RouterTransport {
    app: Router,
}

#[async_trait(?Send)]
impl HttpTransport for RouterTransport {
    async fn send(&self, request: ApiRequest) -> ServiceResult<ApiResponse> {
        let path = request
            .url
            .strip_prefix("http://blog.test")
            .unwrap_or(&request.url)
            .to_string();
        let mut builder = Request::builder().method(request.method.as_str()).uri(path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let body = request.body_text().map(Body::from).unwrap_or_else(Body::empty);
        let req = builder
            .body(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let resp = self
            .app
            .clone()
            .oneshot(req)
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = resp.status().as_u16();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(ApiResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

fn client(token: Option<&str>) -> RestPostsService<RouterTransport, StaticToken> {
    let app = router(ApiState {
        store: InMemoryPostsService::new_with_sample(),
        api_token: Some("secret".into()),
    });
    RestPostsService::new(
        ApiConfig::new("http://blog.test"),
        RouterTransport { app },
        StaticToken(token.map(str::to_string)),
    )
}

#[tokio::test]
async fn admin_flow_create_edit_delete() {
    let service = client(Some("secret"));

    let posts = service.list_posts().await.unwrap();
    assert_eq!(posts.len(), 1);

    let mut modal = PostsModal::new();
    modal.open(ModalKind::Create, None);
    modal.form.title = "Release notes".into();
    modal.form.author = "Ada".into();
    modal.form.content = "Shipped.".into();
    modal.form.tags = vec!["release".into()];
    let toast = modal.handle_create(&service, || {}).await;
    assert!(!toast.is_error(), "{toast:?}");

    let posts = service.list_posts().await.unwrap();
    let created = posts
        .iter()
        .find(|post| post.title == "Release notes")
        .cloned()
        .unwrap();
    assert_eq!(created.content, "U2hpcHBlZC4=");

    modal.open(ModalKind::Edit, Some(created.clone()));
    assert_eq!(modal.form.content, "Shipped.");
    modal.form.content = "Shipped twice.".into();
    let toast = modal.handle_edit(&service, || {}).await;
    assert!(!toast.is_error(), "{toast:?}");

    modal.handle_close();
    modal.open(ModalKind::Delete, Some(created));
    let toast = modal.handle_delete(&service, || {}).await;
    assert!(!toast.is_error(), "{toast:?}");
    assert_eq!(service.list_posts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn wrong_token_is_reported_from_response_body() {
    let service = client(Some("nope"));
    let mut modal = PostsModal::new();
    modal.open(ModalKind::Create, None);
    modal.form.title = "Blocked".into();

    let toast = modal.handle_create(&service, || {}).await;

    assert!(toast.is_error());
    assert_eq!(toast.message, "invalid token");
    assert!(modal.is_open());
}

#[tokio::test]
async fn validation_failure_keeps_status_and_message() {
    let service = client(Some("secret"));
    let err = service
        .create_post(&Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 400, .. }));
    assert_eq!(error_message(&err), "title is required");
}
