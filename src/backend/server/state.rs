/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container, holding:
 * - The token service (signing secret injected at startup, read-only afterwards)
 * - The password hasher
 * - The user and post stores
 *
 * There is no other shared mutable state between requests; concurrency
 * control for posts lives inside the store.
 *
 * # Example
 *
 * ```rust
 * use blogcore::backend::server::state::AppState;
 * use blogcore::shared::ServerConfig;
 *
 * let config = ServerConfig::builder().jwt_secret("secret").build().unwrap();
 * let state = AppState::in_memory(&config);
 * assert_eq!(state.passwords.cost(), config.bcrypt_cost);
 * assert_eq!(state.tokens.ttl(), config.token_ttl);
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::{MemoryStore, PgStore, PostStore, UserStore};
use crate::shared::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Issues and verifies identity tokens
    pub tokens: Arc<TokenService>,

    /// Hashes and verifies passwords
    pub passwords: PasswordHasher,

    /// Credential records
    pub users: Arc<dyn UserStore>,

    /// Posts, comments and like counters
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build state over any store implementing both traits
    pub fn new<S>(config: &ServerConfig, store: Arc<S>) -> Self
    where
        S: UserStore + PostStore + 'static,
    {
        Self {
            tokens: Arc::new(TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl)),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            users: store.clone(),
            posts: store,
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: &ServerConfig) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }

    /// State backed by Postgres
    pub fn postgres(config: &ServerConfig, store: PgStore) -> Self {
        Self::new(config, Arc::new(store))
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PostStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}
