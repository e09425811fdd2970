/**
 * Post Data Structures
 *
 * This module defines the post, comment and category types that flow between
 * the persistence layer and the HTTP handlers. All types serialize to the
 * JSON shapes returned by the `/posts` endpoints.
 *
 * # Ownership
 *
 * `Post::author` is set exactly once, when the post is created, from the
 * authenticated identity of the creator. Nothing in this crate offers a way
 * to change it afterwards: `PostChanges` has no author field.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Tech,
    Lifestyle,
    Health,
    Travel,
}

impl Category {
    /// All accepted categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Lifestyle,
        Category::Health,
        Category::Travel,
    ];

    /// Stored/serialized name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Lifestyle => "Lifestyle",
            Category::Health => "Health",
            Category::Travel => "Travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                SharedError::validation(
                    "category",
                    "Category must be one of Tech, Lifestyle, Health, Travel",
                )
            })
    }
}

/// A comment embedded in a post's ordered comment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,
    /// Comment body
    pub text: String,
    /// Verified identity of the commenter; `None` for anonymous comments
    pub author: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A post as stored, with `author` as a bare user ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub category: Category,
    /// Owner of the post (immutable after creation)
    pub author: Uuid,
    /// Like counter (never decremented)
    pub likes: i64,
    /// Comments in insertion order
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A post with its author expanded, as returned by the read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub category: Category,
    pub author: AuthorSummary,
    pub likes: i64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublishedPost {
    /// Combine a stored post with its author's public details
    pub fn from_parts(post: Post, author: AuthorSummary) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            tags: post.tags,
            category: post.category,
            author,
            likes: post.likes,
            comments: post.comments,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Input for creating a post; `author` comes from the verified identity
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub category: Category,
    pub author: Uuid,
}

/// Field changes applied by an edit. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub category: Option<Category>,
}

impl PostChanges {
    /// Apply the changes to a post in place and bump `updated_at`
    pub fn apply_to(&self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(tags) = &self.tags {
            post.tags = Some(tags.clone());
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        post.updated_at = now;
    }
}

/// Input for appending a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub author: Option<Uuid>,
}

/// Parse a path identifier, reporting a validation error on malformed input
pub fn parse_post_id(raw: &str) -> Result<Uuid, SharedError> {
    Uuid::parse_str(raw).map_err(|_| SharedError::validation("id", "Invalid post ID"))
}
