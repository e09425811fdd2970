/**
 * Database Loading
 *
 * This module connects to the optional PostgreSQL database named by the
 * server configuration and applies migrations.
 *
 * # Error Handling
 *
 * Database errors are logged but do not prevent server startup. If the
 * database is not configured or unreachable, the server runs on the
 * in-memory store instead.
 */

use sqlx::PgPool;

use crate::shared::ServerConfig;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Reads `database_url` from the configuration
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is connected and migrated
/// - `None` if no URL is configured, the connection fails, or migrations fail
pub async fn load_database(config: &ServerConfig) -> DatabaseConfig {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory store.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Falling back to in-memory store.");
        return None;
    }
    tracing::info!("Database migrations completed successfully");

    Some(pool)
}
