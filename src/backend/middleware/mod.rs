//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Authentication gate for protected routes, plus the
//!   `AuthUser` and `OptionalAuthUser` extractors
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::post, Router};
//! use blogcore::backend::middleware::auth_middleware;
//! use blogcore::backend::server::AppState;
//!
//! # fn example(state: AppState) {
//! let protected: Router<AppState> = Router::new()
//!     .route("/posts", post(|| async { "created" }))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! # }
//! ```

pub mod auth;

pub use auth::{
    auth_middleware, authenticate, authenticate_optional, bearer_token, AuthUser, OptionalAuthUser,
};
