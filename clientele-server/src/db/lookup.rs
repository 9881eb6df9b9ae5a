//! Generic row lookup used for existence and uniqueness pre-checks

use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Postgres};

/// Fetch every row of `table` where `column` equals `value`.
///
/// The value is bound as a statement parameter; `table` and `column` are
/// interpolated into the statement text. Callers must only pass trusted,
/// hard-coded identifiers into those positions, never request input.
pub async fn find_rows<V>(
    conn: &mut PgConnection,
    table: &str,
    column: &str,
    value: V,
) -> Result<Vec<PgRow>, sqlx::Error>
where
    V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
{
    let sql = format!("SELECT * FROM {table} WHERE {column} = $1");

    sqlx::query(&sql).bind(value).fetch_all(conn).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn finds_all_matching_rows() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        let mut conn = pool.acquire().await.expect("acquire failed");

        sqlx::query("INSERT INTO clients (name, email) VALUES ($1, $2)")
            .bind("Lookup One")
            .bind("lookup@example.com")
            .execute(&mut *conn)
            .await
            .expect("insert failed");

        let rows = find_rows(&mut conn, "clients", "email", "lookup@example.com".to_owned())
            .await
            .expect("lookup failed");

        assert!(!rows.is_empty());
        for row in &rows {
            let email: String = row.get("email");
            assert_eq!(email, "lookup@example.com");
        }

        sqlx::query("DELETE FROM clients WHERE email = $1")
            .bind("lookup@example.com")
            .execute(&mut *conn)
            .await
            .expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn no_match_returns_empty() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        let mut conn = pool.acquire().await.expect("acquire failed");
        let rows = find_rows(&mut conn, "clients", "id", 999_999_i64)
            .await
            .expect("lookup failed");

        assert!(rows.is_empty());
    }
}
