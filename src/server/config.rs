/**
 * Server Configuration
 *
 * Loads configuration from environment variables:
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `CORS_ORIGINS` - comma-separated allowed origins, `*` for any
 *   (default: `*`)
 *
 * Unlike optional integrations, the database is mandatory: the core's
 * durability guarantees depend on it, so startup fails fast when the
 * store is unreachable.
 */

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub type ConfigError = Box<dyn std::error::Error + Send + Sync>;

/// Connect to the database and apply pending migrations
pub async fn load_database() -> Result<PgPool, ConfigError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(16)
        .connect(&database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

/// Build the CORS layer from `CORS_ORIGINS`
pub fn cors_layer() -> CorsLayer {
    let origins = std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.trim() == "*" {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring unparsable CORS origin: {origin:?}");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(parsed))
}
