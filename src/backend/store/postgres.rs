/**
 * Postgres Store
 *
 * `sqlx`-backed implementation of the store traits. Schema lives in
 * `migrations/`. Comments are rows in their own table ordered by a sequence
 * column, so appending is a single `INSERT`; likes are incremented in a
 * single `UPDATE ... RETURNING`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use super::{PostStore, StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User};
use crate::shared::{
    AuthorSummary, Category, Comment, NewComment, NewPost, Post, PostChanges, PublishedPost,
};

const POST_COLUMNS: &str =
    "id, title, content, tags, category, author, likes, created_at, updated_at";

/// Store backed by a Postgres connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Comments for the given posts, grouped by post and in insertion order
    async fn load_comments(&self, post_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Comment>>, StoreError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_id, text, author, created_at
            FROM comments
            WHERE post_id = ANY($1)
            ORDER BY seq
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for row in rows {
            grouped.entry(row.post_id).or_default().push(row.into_comment());
        }
        Ok(grouped)
    }

    async fn with_comments(&self, row: PostRow) -> Result<Post, StoreError> {
        let mut comments = self.load_comments(&[row.id]).await?;
        let post_comments = comments.remove(&row.id).unwrap_or_default();
        row.into_post(post_comments)
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    tags: Option<String>,
    category: String,
    author: Uuid,
    likes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, comments: Vec<Comment>) -> Result<Post, StoreError> {
        let category = self.category.parse::<Category>().map_err(|_| {
            StoreError::Corrupt(format!("post {} has unknown category {}", self.id, self.category))
        })?;

        Ok(Post {
            id: self.id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            category,
            author: self.author,
            likes: self.likes,
            comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PublishedRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: String,
    author_email: String,
}

impl PublishedRow {
    fn into_published(self, comments: Vec<Comment>) -> Result<PublishedPost, StoreError> {
        let author = AuthorSummary {
            id: self.post.author,
            name: self.author_name,
            email: self.author_email,
        };
        Ok(PublishedPost::from_parts(self.post.into_post(comments)?, author))
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    text: String,
    author: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            text: self.text,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

fn insert_error(e: sqlx::Error, what: &str) -> StoreError {
    let unique = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
    if unique {
        StoreError::Conflict(what.to_string())
    } else {
        StoreError::Database(e)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, "email already registered"))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (id, title, content, tags, category, author, likes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 0, $7, $7)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.tags)
        .bind(post.category.as_str())
        .bind(post.author)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_post(Vec::new())
    }

    async fn list_posts(&self) -> Result<Vec<PublishedPost>, StoreError> {
        let rows = sqlx::query_as::<_, PublishedRow>(
            r#"
            SELECT p.id, p.title, p.content, p.tags, p.category, p.author, p.likes,
                   p.created_at, p.updated_at, u.name AS author_name, u.email AS author_email
            FROM posts p
            JOIN users u ON u.id = p.author
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.post.id).collect();
        let mut comments = self.load_comments(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let post_comments = comments.remove(&row.post.id).unwrap_or_default();
                row.into_published(post_comments)
            })
            .collect()
    }

    async fn find_published_post(&self, id: Uuid) -> Result<Option<PublishedPost>, StoreError> {
        let row = sqlx::query_as::<_, PublishedRow>(
            r#"
            SELECT p.id, p.title, p.content, p.tags, p.category, p.author, p.likes,
                   p.created_at, p.updated_at, u.name AS author_name, u.email AS author_email
            FROM posts p
            JOIN users u ON u.id = p.author
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let comments = self.load_comments(&[id]).await?.remove(&id).unwrap_or_default();
                Ok(Some(row.into_published(comments)?))
            }
            None => Ok(None),
        }
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.with_comments(row).await?)),
            None => Ok(None),
        }
    }

    async fn update_post(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &PostChanges,
    ) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET title = COALESCE($3, title),
                content = COALESCE($4, content),
                tags = COALESCE($5, tags),
                category = COALESCE($6, category),
                updated_at = $7
            WHERE id = $1 AND author = $2
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(&changes.tags)
        .bind(changes.category.map(|category| category.as_str()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.with_comments(row).await?)),
            None => Ok(None),
        }
    }

    async fn delete_post(&self, id: Uuid, owner: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_likes(&self, id: Uuid) -> Result<Option<i64>, StoreError> {
        let likes = sqlx::query_scalar::<_, i64>(
            "UPDATE posts SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(likes)
    }

    async fn append_comment(
        &self,
        id: Uuid,
        comment: NewComment,
    ) -> Result<Option<Vec<Comment>>, StoreError> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, text, author, created_at)
            SELECT $1, $2, $3, $4, $5
            WHERE EXISTS (SELECT 1 FROM posts WHERE id = $2)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(&comment.text)
        .bind(comment.author)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if inserted.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(self.load_comments(&[id]).await?.remove(&id).unwrap_or_default()))
    }

    async fn list_comments(&self, id: Uuid) -> Result<Option<Vec<Comment>>, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        if !exists {
            return Ok(None);
        }

        Ok(Some(self.load_comments(&[id]).await?.remove(&id).unwrap_or_default()))
    }
}
