use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::models::{BlogPost, PostPayload};
use crate::post_form::encode_content;

use super::{ApiError, PostsService, ServiceResult};

#[derive(Default)]
struct InMemoryState {
    next_id: u64,
    posts: BTreeMap<u64, BlogPost>,
}

/// Posts kept in process memory. Content goes in as plain text and is stored
/// base64-encoded, the same shape the real API hands back.
#[derive(Clone, Default)]
pub struct InMemoryPostsService {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryPostsService {
    pub fn new_with_sample() -> Self {
        let service = Self::default();
        service.insert(&PostPayload {
            title: "Welcome to the blog".into(),
            author: "Editorial team".into(),
            content: "First post of the new site.".into(),
            categories: vec!["news".into()],
            tags: vec!["welcome".into()],
            original_filename: "welcome.md".into(),
        });
        service
    }

    fn state(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<BlogPost> {
        self.state().posts.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<BlogPost> {
        let key = id.parse::<u64>().ok()?;
        self.state().posts.get(&key).cloned()
    }

    pub fn insert(&self, payload: &PostPayload) -> BlogPost {
        let mut state = self.state();
        state.next_id += 1;
        let id = state.next_id;
        let post = stored_post(id.to_string(), payload);
        state.posts.insert(id, post.clone());
        post
    }

    pub fn replace(&self, id: &str, payload: &PostPayload) -> ServiceResult<BlogPost> {
        let key = parse_id(id)?;
        let mut state = self.state();
        let slot = state
            .posts
            .get_mut(&key)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        *slot = stored_post(key.to_string(), payload);
        Ok(slot.clone())
    }

    pub fn remove(&self, id: &str) -> ServiceResult<BlogPost> {
        let key = parse_id(id)?;
        self.state()
            .posts
            .remove(&key)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}

fn parse_id(id: &str) -> ServiceResult<u64> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::MissingPostId);
    }
    id.parse::<u64>()
        .map_err(|_| ApiError::NotFound(id.to_string()))
}

fn stored_post(id: String, payload: &PostPayload) -> BlogPost {
    BlogPost {
        id,
        title: payload.title.clone(),
        author: payload.author.clone(),
        content: encode_content(&payload.content),
        categories: payload.categories.clone(),
        tags: payload.tags.clone(),
        original_filename: payload.original_filename.clone(),
    }
}

#[async_trait(?Send)]
impl PostsService for InMemoryPostsService {
    async fn list_posts(&self) -> ServiceResult<Vec<BlogPost>> {
        Ok(self.list())
    }

    async fn create_post(&self, payload: &PostPayload) -> ServiceResult<()> {
        self.insert(payload);
        Ok(())
    }

    async fn update_post(&self, id: &str, payload: &PostPayload) -> ServiceResult<()> {
        self.replace(id, payload).map(|_| ())
    }

    async fn delete_post(&self, id: &str) -> ServiceResult<()> {
        self.remove(id).map(|_| ())
    }
}
