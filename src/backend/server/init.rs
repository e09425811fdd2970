/**
 * Server Initialization
 *
 * This module builds the application state from configuration and wires it
 * into the router.
 *
 * # Initialization Process
 *
 * 1. Load the optional database (migrations included)
 * 2. Pick the Postgres store or fall back to the in-memory store
 * 3. Create the token service and password hasher from configuration
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::store::PgStore;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is resilient to a missing or unreachable database: the
/// server continues on the in-memory store. Configuration problems (such as
/// a missing signing secret) are caught earlier, when `ServerConfig` is built.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing blog backend server");

    let app_state = match load_database(config).await {
        Some(pool) => AppState::postgres(config, PgStore::new(pool)),
        None => AppState::in_memory(config),
    };

    tracing::info!(
        token_ttl_secs = app_state.tokens.ttl().as_secs(),
        bcrypt_cost = app_state.passwords.cost(),
        "Application state initialized"
    );

    create_router(app_state)
}
