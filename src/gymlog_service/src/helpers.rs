use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

use gymlog_adapters::config::Settings;

/// Create the PostgreSQL connection pool from settings and run all pending
/// migrations.
pub async fn configure_postgresql(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    let pool = get_postgres_pool(
        settings.postgres.url.expose_secret(),
        settings.postgres.max_connections,
    )
    .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
