use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use crate::models::{BlogPost, PostPayload};

/// Editable copy of a post held by the modal while it is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub content: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub original_filename: String,
}

impl PostForm {
    /// Derives the form from the current selection. Nothing selected gives empty fields.
    pub fn from_selection(selected: Option<&BlogPost>) -> Self {
        let Some(post) = selected else {
            return Self::default();
        };
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            content: decode_content(&post.content),
            categories: post.categories.clone(),
            tags: post.tags.clone(),
            original_filename: post.original_filename.clone(),
        }
    }

    pub fn to_payload(&self) -> PostPayload {
        PostPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            categories: self.categories.clone(),
            tags: self.tags.clone(),
            original_filename: self.original_filename.clone(),
        }
    }
}

/// Appends `item` unless it is blank or already listed. Returns whether the list changed.
pub fn add_list_item(list: &mut Vec<String>, item: &str) -> bool {
    let item = item.trim();
    if item.is_empty() || list.iter().any(|existing| existing == item) {
        return false;
    }
    list.push(item.to_string());
    true
}

pub fn remove_list_item(list: &mut Vec<String>, index: usize) -> Option<String> {
    (index < list.len()).then(|| list.remove(index))
}

/// Decodes base64 post content. Content that is not valid base64 UTF-8 is kept as-is.
pub fn decode_content(encoded: &str) -> String {
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|err| err.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|err| err.to_string()));
    match decoded {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "post content is not base64, showing it raw");
            encoded.to_string()
        }
    }
}

pub fn encode_content(plain: &str) -> String {
    STANDARD.encode(plain.as_bytes())
}
