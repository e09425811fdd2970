/**
 * API Route Handlers
 *
 * This module defines the routes for the authentication and post endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `GET /posts` - List posts
 * - `GET /posts/{id}` - Get one post
 * - `POST /posts/{id}/like` - Like a post
 * - `GET /posts/{id}/comments` - List comments
 * - `POST /posts/{id}/comments` - Add a comment (optional token)
 *
 * ## Behind the authentication gate
 * - `GET /auth/me` - Current user
 * - `POST /posts` - Create a post
 * - `PUT /posts/{id}` - Edit a post (owner only)
 * - `DELETE /posts/{id}` - Delete a post (owner only)
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{
    add_comment, create_post, delete_post, edit_post, get_post, like_post, list_comments,
    list_posts,
};
use crate::backend::server::state::AppState;

/// Routes reachable without a token
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/like", post(like_post))
        .route(
            "/posts/{id}/comments",
            get(list_comments).post(add_comment),
        )
}

/// Routes wrapped in `auth_middleware`
///
/// `route_layer` only runs the gate for requests that matched one of these
/// routes, so unknown paths still fall through to the 404 fallback.
fn protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(get_me))
        .route("/posts", post(create_post))
        .route("/posts/{id}", put(edit_post).delete(delete_post))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ))
}

/// Configure API routes
///
/// # Arguments
///
/// * `app_state` - Application state, needed to build the authentication gate
///
/// # Returns
///
/// Router with public and protected routes merged
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    public_routes().merge(protected_routes(app_state))
}
