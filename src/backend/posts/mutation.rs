/**
 * Owned Resource Mutation
 *
 * The sequence shared by edit and delete once the authentication gate has
 * produced an identity:
 *
 * 1. Load the post by ID (`NotFound` if absent)
 * 2. Check ownership (`Forbidden` if the identity is not the author)
 * 3. Apply the change and persist it
 *
 * Steps 1 and 2 live in `load_owned`; `edit_owned` and `delete_owned` add
 * step 3. An edit's changes are only built once ownership is confirmed, so a
 * stranger or a missing post is reported before any complaint about the
 * request body.
 *
 * Every step is terminal on failure and nothing is retried. The persist step
 * passes the verified owner back to the store, which only writes a row whose
 * `author` still matches; if the post vanished in between, the result is
 * `NotFound`. A store failure after authorization surfaces as a 500 with no
 * partial state exposed.
 */

use uuid::Uuid;

use crate::backend::auth::sessions::Identity;
use crate::backend::error::ApiError;
use crate::backend::posts::ownership::authorize;
use crate::backend::store::PostStore;
use crate::shared::{Post, PostChanges};

/// Load a post and confirm `identity` owns it
pub async fn load_owned(
    posts: &dyn PostStore,
    identity: &Identity,
    post_id: Uuid,
) -> Result<Post, ApiError> {
    let post = posts
        .find_post(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;

    if !authorize(identity, post.author).is_allowed() {
        tracing::warn!(
            post_id = %post_id,
            user_id = %identity.user_id(),
            owner = %post.author,
            "Ownership check failed"
        );
        return Err(ApiError::Forbidden);
    }

    Ok(post)
}

/// Edit a post on behalf of its owner
///
/// `changes` runs only after the ownership check passes.
pub async fn edit_owned<F>(
    posts: &dyn PostStore,
    identity: &Identity,
    post_id: Uuid,
    changes: F,
) -> Result<Post, ApiError>
where
    F: FnOnce() -> Result<PostChanges, ApiError>,
{
    let post = load_owned(posts, identity, post_id).await?;
    let changes = changes()?;

    let updated = posts
        .update_post(post_id, post.author, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;
    tracing::info!(post_id = %post_id, "Post updated");
    Ok(updated)
}

/// Delete a post on behalf of its owner
pub async fn delete_owned(
    posts: &dyn PostStore,
    identity: &Identity,
    post_id: Uuid,
) -> Result<(), ApiError> {
    let post = load_owned(posts, identity, post_id).await?;

    if !posts.delete_post(post_id, post.author).await? {
        return Err(ApiError::not_found("Post"));
    }
    tracing::info!(post_id = %post_id, "Post deleted");
    Ok(())
}
