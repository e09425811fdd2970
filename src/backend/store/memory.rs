//! In-memory store
//!
//! Keeps users and posts in hash maps behind a single `tokio::sync::RwLock`.
//! Each trait method takes the lock once, so every write (including like
//! increments and comment appends) is atomic with respect to other requests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PostStore, StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User};
use crate::shared::{Comment, NewComment, NewPost, Post, PostChanges, PublishedPost};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, Post>,
    /// Insertion sequence per post; breaks `created_at` ties when listing
    post_seq: HashMap<Uuid, u64>,
    next_seq: u64,
}

impl Tables {
    fn publish(&self, post: &Post) -> Result<PublishedPost, StoreError> {
        let author = self.users.get(&post.author).ok_or_else(|| {
            StoreError::Corrupt(format!("post {} references missing user {}", post.id, post.author))
        })?;
        Ok(PublishedPost::from_parts(post.clone(), author.summary()))
    }
}

/// Store that lives for the lifetime of the process
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|existing| existing.email == user.email) {
            return Err(StoreError::Conflict(format!("email {} already registered", user.email)));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|user| user.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            tags: post.tags,
            category: post.category,
            author: post.author,
            likes: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let mut tables = self.tables.write().await;
        tables.next_seq += 1;
        let seq = tables.next_seq;
        tables.post_seq.insert(post.id, seq);
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<PublishedPost>, StoreError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<&Post> = tables.posts.values().collect();
        posts.sort_by_key(|post| {
            let seq = tables.post_seq.get(&post.id).copied().unwrap_or_default();
            std::cmp::Reverse((post.created_at, seq))
        });
        posts.into_iter().map(|post| tables.publish(post)).collect()
    }

    async fn find_published_post(&self, id: Uuid) -> Result<Option<PublishedPost>, StoreError> {
        let tables = self.tables.read().await;
        tables.posts.get(&id).map(|post| tables.publish(post)).transpose()
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn update_post(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &PostChanges,
    ) -> Result<Option<Post>, StoreError> {
        let mut tables = self.tables.write().await;
        match tables.posts.get_mut(&id) {
            Some(post) if post.author == owner => {
                changes.apply_to(post, Utc::now());
                Ok(Some(post.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_post(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let owned = tables.posts.get(&id).is_some_and(|post| post.author == owner);
        if owned {
            tables.posts.remove(&id);
            tables.post_seq.remove(&id);
        }
        Ok(owned)
    }

    async fn increment_likes(&self, id: Uuid) -> Result<Option<i64>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.get_mut(&id).map(|post| {
            post.likes += 1;
            post.likes
        }))
    }

    async fn append_comment(
        &self,
        id: Uuid,
        comment: NewComment,
    ) -> Result<Option<Vec<Comment>>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.get_mut(&id).map(|post| {
            post.comments.push(Comment {
                id: Uuid::new_v4(),
                text: comment.text,
                author: comment.author,
                created_at: Utc::now(),
            });
            post.comments.clone()
        }))
    }

    async fn list_comments(&self, id: Uuid) -> Result<Option<Vec<Comment>>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).map(|post| post.comments.clone()))
    }
}
