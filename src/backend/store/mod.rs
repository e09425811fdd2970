//! Persistence Module
//!
//! This module defines the persistence collaborator used by the handlers:
//! one trait for credential records and one for posts with their embedded
//! comments and like counter. Two implementations are provided:
//!
//! - **`postgres`** - `PgStore`, backed by a `sqlx` connection pool
//! - **`memory`** - `MemoryStore`, used when no database is configured and in tests
//!
//! # Atomicity
//!
//! Every method is a single atomic write per resource. In particular
//! `increment_likes` and `append_comment` never read-modify-write across
//! separate statements, so concurrent likes are never lost, and
//! `update_post`/`delete_post` only touch a row whose `author` still matches
//! the expected owner.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::shared::{Comment, NewComment, NewPost, Post, PostChanges, PublishedPost};

/// In-memory store
pub mod memory;

/// Postgres store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write
    #[error("conflict: {0}")]
    Conflict(String),

    /// The underlying database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data could not be interpreted
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Storage for credential records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; fails with `Conflict` if the email is taken
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by exact email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by ID
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Storage for posts, their comments and like counters
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post with zero likes and no comments
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    /// All posts with authors expanded, newest first
    async fn list_posts(&self) -> Result<Vec<PublishedPost>, StoreError>;

    /// One post with its author expanded
    async fn find_published_post(&self, id: Uuid) -> Result<Option<PublishedPost>, StoreError>;

    /// One post as stored
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Apply changes to the post if it exists and is still owned by `owner`
    async fn update_post(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &PostChanges,
    ) -> Result<Option<Post>, StoreError>;

    /// Remove the post (and its comments) if it exists and is still owned by `owner`
    async fn delete_post(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError>;

    /// Atomically add one like; returns the new count, or `None` if the post is gone
    async fn increment_likes(&self, id: Uuid) -> Result<Option<i64>, StoreError>;

    /// Atomically append a comment; returns the full ordered list
    async fn append_comment(
        &self,
        id: Uuid,
        comment: NewComment,
    ) -> Result<Option<Vec<Comment>>, StoreError>;

    /// The post's comments in insertion order
    async fn list_comments(&self, id: Uuid) -> Result<Option<Vec<Comment>>, StoreError>;
}
