//! Schema bootstrap for the clients table

use sqlx::PgPool;

/// Create the clients table if it does not exist.
///
/// Note: `email` carries no UNIQUE constraint. Uniqueness is checked in the
/// handlers with a query before each write, and that check is the only guard.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running clients migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
