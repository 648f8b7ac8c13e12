//! Post Module
//!
//! The record entity and the request shapes that create or modify it.

use serde::{Deserialize, Serialize};

use crate::error::{PostboxError, Result};

/// A stored post
///
/// Serializes as `{"id": int, "title": string, "content": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique, positive, assigned by the store
    pub id: u64,

    /// Never empty once persisted
    pub title: String,

    /// Never empty once persisted
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Check that both fields are present and non-empty
    ///
    /// Reports every missing field at once, title first.
    pub fn validate(self) -> Result<(String, String)> {
        let title = self.title.filter(|t| !t.is_empty());
        let content = self.content.filter(|c| !c.is_empty());

        match (title, content) {
            (Some(title), Some(content)) => Ok((title, content)),
            (title, content) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if content.is_none() {
                    missing.push("content");
                }
                Err(PostboxError::Validation { missing })
            }
        }
    }
}

/// Body of an update request
///
/// Absent or empty fields leave the stored value untouched; a field
/// cannot be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Overwrite the non-empty fields onto `post`
    ///
    /// Returns true if the post changed.
    pub fn apply(&self, post: &mut Post) -> bool {
        let mut changed = false;

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            changed |= post.title != title;
            post.title = title.to_string();
        }
        if let Some(content) = self.content.as_deref().filter(|c| !c.is_empty()) {
            changed |= post.content != content;
            post.content = content.to_string();
        }

        changed
    }
}

/// The two demo posts a fresh installation can be seeded with
pub fn sample_posts() -> Vec<NewPost> {
    vec![
        NewPost::new("First post", "This is the first post."),
        NewPost::new("Second post", "This is the second post."),
    ]
}
