use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;

use blog_site::config::ApiConfig;
use blog_site::controller::PostsModal;
use blog_site::modal::ModalKind;
use blog_site::models::BlogPost;
use blog_site::notify::{self, Toast};
use blog_site::services::{
    ApiError, ApiRequest, ApiResponse, HttpTransport, Method, RestPostsService, ServiceResult,
    StaticToken,
};

#[derive(Clone)]
struct RecordingTransport {
    sent: Rc<RefCell<Vec<ApiRequest>>>,
    reply: ApiResponse,
}

impl RecordingTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            sent: Rc::new(RefCell::new(Vec::new())),
            reply: ApiResponse {
                status,
                body: body.to_string(),
            },
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> ServiceResult<ApiResponse> {
        self.sent.borrow_mut().push(request);
        Ok(self.reply.clone())
    }
}

/// Every send fails before reaching the server.
struct FailingTransport;

#[async_trait(?Send)]
impl HttpTransport for FailingTransport {
    async fn send(&self, _request: ApiRequest) -> ServiceResult<ApiResponse> {
        Err(ApiError::Network("connection refused".into()))
    }
}

fn service(transport: &RecordingTransport) -> RestPostsService<RecordingTransport, StaticToken> {
    RestPostsService::new(
        ApiConfig::new("https://blog.example.com/api"),
        transport.clone(),
        StaticToken(Some("tok-123".into())),
    )
}

fn selected() -> BlogPost {
    BlogPost {
        id: "42".into(),
        title: "Old title".into(),
        author: "Ada".into(),
        content: "SGVsbG8=".into(),
        categories: vec!["news".into()],
        tags: vec![],
        original_filename: "old.md".into(),
    }
}

#[tokio::test]
async fn create_sends_exactly_one_post_with_form_body() {
    let transport = RecordingTransport::replying(201, r#"{"status":"ok"}"#);
    let service = service(&transport);
    let refetched = Cell::new(0);

    let mut modal = PostsModal::new();
    modal.open(ModalKind::Create, None);
    modal.form.title = "A".into();
    modal.form.author = "B".into();
    modal.form.content = "C".into();
    modal.form.original_filename = "f".into();

    let toast = modal
        .handle_create(&service, || refetched.set(refetched.get() + 1))
        .await;

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    let request = &sent[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "https://blog.example.com/api/posts");
    assert_eq!(request.header("Authorization"), Some("Bearer tok-123"));
    assert!(request.include_credentials);
    assert_eq!(
        request.body,
        Some(json!({
            "title": "A",
            "author": "B",
            "content": "C",
            "categories": [],
            "tags": [],
            "originalFilename": "f"
        }))
    );
    assert_eq!(toast, Toast::success(notify::CREATED));
    assert_eq!(refetched.get(), 1);
    assert!(!modal.is_open());
}

#[tokio::test]
async fn edit_puts_decoded_content_to_post_path() {
    let transport = RecordingTransport::replying(200, "{}");
    let service = service(&transport);

    let mut modal = PostsModal::new();
    modal.open(ModalKind::Edit, Some(selected()));
    modal.form.title = "New title".into();

    let toast = modal.handle_edit(&service, || {}).await;

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].url, "https://blog.example.com/api/posts/42");
    let body = sent[0].body.clone().unwrap();
    assert_eq!(body["title"], "New title");
    assert_eq!(body["content"], "Hello");
    assert_eq!(body["originalFilename"], "old.md");
    assert_eq!(toast.message, notify::UPDATED);
}

#[tokio::test]
async fn delete_sends_one_bodiless_request_for_selected_id() {
    let transport = RecordingTransport::replying(200, "{}");
    let service = service(&transport);

    let mut modal = PostsModal::new();
    modal.open(ModalKind::Delete, Some(selected()));
    let toast = modal.handle_delete(&service, || {}).await;

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Delete);
    assert!(sent[0].url.ends_with("/posts/42"));
    assert!(sent[0].body.is_none());
    assert_eq!(toast.message, notify::DELETED);
}

#[tokio::test]
async fn failure_surfaces_api_message_and_skips_refetch() {
    let transport =
        RecordingTransport::replying(400, r#"{"status":"error","message":"title is required"}"#);
    let service = service(&transport);
    let refetched = Cell::new(false);

    let mut modal = PostsModal::new();
    modal.open(ModalKind::Create, None);
    let toast = modal.handle_create(&service, || refetched.set(true)).await;

    assert_eq!(toast, Toast::error("title is required"));
    assert!(!refetched.get());
    assert!(modal.is_open());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn unreachable_api_keeps_edit_open_until_overlay_closes_it() {
    let service = RestPostsService::new(
        ApiConfig::new("https://blog.example.com/api"),
        FailingTransport,
        StaticToken(Some("tok-123".into())),
    );
    let refetched = Cell::new(false);

    let mut modal = PostsModal::new();
    modal.open(ModalKind::Edit, Some(selected()));
    modal.form.title = "Unsaved title".into();
    let toast = modal.handle_edit(&service, || refetched.set(true)).await;

    assert_eq!(toast, Toast::error("network error: connection refused"));
    assert!(!refetched.get());
    assert!(modal.is_open());
    assert_eq!(modal.form.title, "Unsaved title");
    assert_eq!(modal.selected_post, Some(selected()));

    modal.close_control();
    assert!(!modal.is_open());
    assert!(modal.selected_post.is_none());
    assert!(modal.form.title.is_empty());
}

#[test]
fn closing_edit_or_delete_clears_selection_but_create_cancel_does_not() {
    let mut modal = PostsModal::new();
    modal.open(ModalKind::Edit, Some(selected()));
    modal.handle_close();
    assert!(modal.selected_post.is_none());

    modal.open(ModalKind::Delete, Some(selected()));
    modal.close_control();
    assert!(modal.selected_post.is_none());

    modal.open(ModalKind::Create, Some(selected()));
    modal.dismiss();
    assert_eq!(modal.selected_post, Some(selected()));
    assert!(!modal.is_open());
}

#[test]
fn switching_selection_rebuilds_the_form() {
    let mut modal = PostsModal::new();
    modal.open(ModalKind::Edit, Some(selected()));
    assert_eq!(modal.form.content, "Hello");

    let other = BlogPost {
        id: "7".into(),
        title: "Other".into(),
        content: "V29ybGQ=".into(),
        ..BlogPost::default()
    };
    modal.open(ModalKind::Edit, Some(other));
    assert_eq!(modal.form.title, "Other");
    assert_eq!(modal.form.content, "World");
    assert!(modal.form.categories.is_empty());
}
