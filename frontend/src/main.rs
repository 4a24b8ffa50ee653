use async_trait::async_trait;
use dioxus::prelude::*;
use reqwasm::http::{Request, RequestCredentials};

use blog_site::config::{ApiConfig, DEFAULT_API_URL};
use blog_site::controller::PostsModal;
use blog_site::modal::ModalKind;
use blog_site::models::{BlogPost, SocialLinks, Supporter, TeamMember};
use blog_site::notify::{Toast, Toasts};
use blog_site::services::{
    ApiError, ApiRequest, ApiResponse, HttpTransport, Method, PostsService, RestPostsService,
    ServiceResult, TokenSource, error_message,
};

mod components;

use components::{PostsModalView, SupporterCard, TeamSocialIcon, ToastList};

fn main() {
    launch(App);
}

// ---------- Utilities ----------
fn window() -> Option<web_sys::Window> { web_sys::window() }
fn save_token_to_storage(key: &str, token: &str) { if let Some(win) = window() { if let Ok(Some(storage)) = win.local_storage() { let _ = storage.set_item(key, token); } } }
fn load_token_from_storage(key: &str) -> Option<String> { window().and_then(|win| win.local_storage().ok().flatten()).and_then(|s| s.get_item(key).ok().flatten()) }

fn api_base_default() -> String {
    option_env!("BLOG_API_URL").unwrap_or(DEFAULT_API_URL).to_string()
}

/// API base as typed in the admin page, token key fixed at build time by `BLOG_TOKEN_KEY`.
fn api_config(base: &str) -> ApiConfig {
    ApiConfig::new(base).with_token_key(option_env!("BLOG_TOKEN_KEY").unwrap_or_default())
}

fn token_key() -> String {
    api_config(DEFAULT_API_URL).token_key
}

struct LocalStorageToken {
    key: String,
}

impl TokenSource for LocalStorageToken {
    fn token(&self) -> Option<String> {
        load_token_from_storage(&self.key).filter(|token| !token.trim().is_empty())
    }
}

/// Browser `fetch` via reqwasm; cookies ride along when the request asks for credentials.
struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ServiceResult<ApiResponse> {
        let mut req = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        if request.include_credentials {
            req = req.credentials(RequestCredentials::Include);
        }
        if let Some(body) = request.body_text() {
            req = req.body(body);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(format!("failed to read response: {e}")))?;
        Ok(ApiResponse { status, body })
    }
}

pub(crate) fn posts_client(base: &str) -> RestPostsService<FetchTransport, LocalStorageToken> {
    let config = api_config(base);
    let tokens = LocalStorageToken { key: config.token_key.clone() };
    RestPostsService::new(config, FetchTransport, tokens)
}

// ---------- Static sections ----------
fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Amina Yusuf".into(),
            position: Some("Founder".into()),
            image: Some("/images/team/amina.jpg".into()),
            social_links: SocialLinks {
                linkedin: Some("https://www.linkedin.com/in/amina-yusuf".into()),
                twitter: Some("https://twitter.com/aminayusuf".into()),
                ..SocialLinks::default()
            },
        },
        TeamMember {
            name: "Jonas Weber".into(),
            position: Some("Community lead".into()),
            image: Some("/images/team/jonas.jpg".into()),
            social_links: SocialLinks {
                facebook: Some("https://facebook.com/jonas.weber".into()),
                youtube: Some("https://youtube.com/@jonasweber".into()),
                instagram: Some("https://instagram.com/jonas.weber".into()),
                ..SocialLinks::default()
            },
        },
    ]
}

fn supporters() -> Vec<Supporter> {
    vec![
        Supporter { link: "https://www.rust-lang.org".into(), src: "/images/supporters/rust.svg".into(), alt: "Rust".into(), aos: Some("fade-up".into()) },
        Supporter { link: "https://dioxuslabs.com".into(), src: "/images/supporters/dioxus.svg".into(), alt: "Dioxus".into(), aos: Some("fade-up".into()) },
    ]
}

// ---------- App ----------
fn App() -> Element {
    let start_path = window().and_then(|win| win.location().pathname().ok()).unwrap_or_else(|| "/".to_string());
    let mut is_admin_page = use_signal(move || start_path.starts_with("/admin"));
    let mut api_base = use_signal(api_base_default);
    let mut token = use_signal(|| load_token_from_storage(&token_key()).unwrap_or_default());
    let mut status = use_signal(|| "Waiting...".to_string());
    let posts = use_signal(Vec::<BlogPost>::new);
    let mut modal = use_signal(PostsModal::new);
    let toasts = use_signal(Toasts::default);

    let load_posts = move || {
        let base = api_base.read().clone();
        let mut status = status;
        let mut posts = posts;
        let mut toasts = toasts;
        spawn(async move {
            status.set("Loading posts...".into());
            match posts_client(&base).list_posts().await {
                Ok(list) => {
                    status.set(format!("Loaded {} posts", list.len()));
                    posts.set(list);
                }
                Err(err) => {
                    let message = error_message(&err);
                    status.set(format!("Failed to load posts: {message}"));
                    toasts.write().push(Toast::error(message));
                }
            }
        });
    };

    let is_admin = *is_admin_page.read();
    let team = team_members();
    let supporter_list = supporters();

    rsx! {
        div { class: "app-shell",
            nav { class: "top-nav",
                div { class: "brand", span { class: "brand__dot" } strong { "Blog" } }
                div { class: "nav-links",
                    a { class: if !is_admin { "nav-link active" } else { "nav-link" }, href: "/", onclick: move |_| { is_admin_page.set(false); }, "Home" }
                    a { class: if is_admin { "nav-link active" } else { "nav-link" }, href: "/admin", onclick: move |_| { is_admin_page.set(true); }, "Admin" }
                }
            }

            ToastList { toasts }

            {if !is_admin { rsx! {
                section { class: "panel",
                    h2 { "Our team" }
                    div { class: "team-grid",
                        for member in team {
                            div { key: "{member.name}", class: "team-card",
                                if let Some(image) = member.image.clone() { img { src: "{image}", alt: "{member.name}" } }
                                strong { "{member.name}" }
                                div { class: "meta", "{member.position.clone().unwrap_or_default()}" }
                                TeamSocialIcon { member: member.clone() }
                            }
                        }
                    }
                }
                section { class: "panel",
                    h2 { "Supporters" }
                    div { class: "supporter-grid",
                        for supporter in supporter_list {
                            SupporterCard { key: "{supporter.alt}", supporter: supporter.clone() }
                        }
                    }
                }
            }} else { rsx! {
                div { class: "status-bar", "Status: {status.read()}" }
                section { class: "panel grid two",
                    div {
                        label { "API base" }
                        input { value: "{api_base.read()}", oninput: move |evt| api_base.set(evt.value()) }
                    }
                    div {
                        label { "Access token" }
                        textarea { value: "{token.read()}", rows: "2", oninput: move |evt| { token.set(evt.value()); save_token_to_storage(&token_key(), &evt.value()); } }
                        div { class: "actions",
                            button { onclick: move |_| { token.set("".into()); save_token_to_storage(&token_key(), ""); status.set("Token cleared".into()); }, "Clear token" }
                        }
                    }
                }
                section { class: "panel",
                    div { class: "panel__header",
                        h3 { "Posts" }
                        div { class: "actions",
                            button { onclick: move |_| load_posts(), "Refresh" }
                            button { onclick: move |_| modal.write().open(ModalKind::Create, None), "New post" }
                        }
                    }
                    table { class: "posts-table",
                        thead { tr { th { "Title" } th { "Author" } th { "Categories" } th { "Tags" } th {} } }
                        tbody {
                            for post in posts.read().iter().cloned() {
                                tr { key: "{post.id}",
                                    td { "{post.title}" }
                                    td { "{post.author}" }
                                    td { {post.categories.join(", ")} }
                                    td { {post.tags.join(", ")} }
                                    td { class: "actions",
                                        button {
                                            onclick: {
                                                let post = post.clone();
                                                move |_| modal.write().open(ModalKind::Edit, Some(post.clone()))
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let post = post.clone();
                                                move |_| modal.write().open(ModalKind::Delete, Some(post.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                PostsModalView { state: modal, toasts, api_base, on_saved: move |_| load_posts() }
            }}}
        }
    }
}
