/**
 * Post Handler Types
 *
 * Request and response bodies for the `/posts` endpoints. Request fields are
 * all optional at the serde level so that a missing field is reported as a
 * 400 with a readable message instead of a generic deserialization failure.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::require_text;
use crate::shared::{Category, Comment, Post, PostChanges, SharedError};

/// Create post request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    /// One of `Tech`, `Lifestyle`, `Health`, `Travel`; defaults to `Tech`
    pub category: Option<String>,
}

/// Edit post request
///
/// Absent or empty values leave the stored field unchanged. There is no
/// `author` field; ownership cannot be transferred.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub category: Option<String>,
}

/// Add comment request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct AddCommentRequest {
    pub text: Option<String>,
    /// Accepted for compatibility with older clients and ignored
    pub author: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_category(value: Option<String>) -> Result<Option<Category>, SharedError> {
    non_empty(value).map(|raw| raw.parse()).transpose()
}

impl CreatePostRequest {
    /// Validate into `(title, content, tags, category)`
    pub fn validate(self) -> Result<(String, String, Option<String>, Category), SharedError> {
        const MESSAGE: &str = "Title and content are required";
        let title = require_text("title", self.title.as_deref(), MESSAGE)?;
        let content = require_text("content", self.content.as_deref(), MESSAGE)?;
        let category = parse_category(self.category)?.unwrap_or_default();
        Ok((title, content, non_empty(self.tags), category))
    }
}

impl UpdatePostRequest {
    /// Convert into the set of changes to apply
    pub fn into_changes(self) -> Result<PostChanges, SharedError> {
        Ok(PostChanges {
            title: non_empty(self.title),
            content: non_empty(self.content),
            tags: non_empty(self.tags),
            category: parse_category(self.category)?,
        })
    }
}

/// Response for a created post
#[derive(Serialize, Deserialize, Debug)]
pub struct PostCreatedResponse {
    pub message: String,
    pub post: Post,
}

/// Response for an edited post
#[derive(Serialize, Deserialize, Debug)]
pub struct PostUpdatedResponse {
    pub message: String,
    pub post: Post,
}

/// Plain acknowledgement
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a like
#[derive(Serialize, Deserialize, Debug)]
pub struct LikeResponse {
    pub message: String,
    pub likes: i64,
}

/// Response for an added comment, carrying the full ordered list
#[derive(Serialize, Deserialize, Debug)]
pub struct CommentAddedResponse {
    pub message: String,
    pub comments: Vec<Comment>,
}

/// Whether a body-supplied comment author differs from the verified one
pub fn is_spoofed_author(claimed: Option<&str>, verified: Option<Uuid>) -> bool {
    match claimed {
        None => false,
        Some(claimed) => verified.map(|id| id.to_string()) != Some(claimed.to_string()),
    }
}
