//! Client repository
//!
//! All five operations run on one scoped connection handed in by the
//! caller. Email uniqueness is enforced here with a query before each
//! write; the check and the write are separate statements, so concurrent
//! requests with the same email can both pass the check and both write.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, Row};

use crate::db::lookup::find_rows;

/// Client record from the warehouse
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update: only set fields are written.
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ClientChanges {
    /// Assemble the SET clause and its bind values, in declaration order.
    ///
    /// An empty change set produces an empty clause; the resulting
    /// statement is malformed and the warehouse rejects it as a statement
    /// error, which is the established failure mode for an empty body.
    pub fn set_clause(&self) -> (String, Vec<String>) {
        let mut parts = Vec::new();
        let mut values = Vec::new();

        if let Some(name) = &self.name {
            values.push(name.clone());
            parts.push(format!("name = ${}", values.len()));
        }
        if let Some(email) = &self.email {
            values.push(email.clone());
            parts.push(format!("email = ${}", values.len()));
        }

        (parts.join(", "), values)
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{message}")]
    Conflict { message: &'static str },

    #[error("{message}")]
    NotFound { message: &'static str },
}

/// Client repository over one scoped connection
pub struct ClientRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ClientRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a client after checking the email is unused.
    ///
    /// The inserted row is re-read by email, not by the generated id; if
    /// two creates for the same email race past the check, this may return
    /// either writer's row.
    pub async fn create(&mut self, name: &str, email: &str) -> Result<Client, DbError> {
        let existing = find_rows(&mut *self.conn, "clients", "email", email.to_owned()).await?;
        if !existing.is_empty() {
            return Err(DbError::Conflict {
                message: "Email already exists",
            });
        }

        sqlx::query("INSERT INTO clients (name, email) VALUES ($1, $2)")
            .bind(name)
            .bind(email)
            .execute(&mut *self.conn)
            .await?;

        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, email, created_at FROM clients WHERE email = $1",
        )
        .bind(email)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(client)
    }

    /// All clients, ascending id. Full scan, no pagination.
    pub async fn list(&mut self) -> Result<Vec<Client>, DbError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, email, created_at FROM clients ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(clients)
    }

    pub async fn get(&mut self, id: i64) -> Result<Client, DbError> {
        sqlx::query_as::<_, Client>(
            "SELECT id, name, email, created_at FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound {
            message: "Client not found",
        })
    }

    /// Write exactly the supplied fields, then re-read the row by id.
    pub async fn update(&mut self, id: i64, changes: &ClientChanges) -> Result<Client, DbError> {
        let existing = find_rows(&mut *self.conn, "clients", "id", id).await?;
        if existing.is_empty() {
            return Err(DbError::NotFound {
                message: "Invalid id!",
            });
        }

        if let Some(email) = &changes.email {
            let matches = find_rows(&mut *self.conn, "clients", "email", email.clone()).await?;
            if let Some(row) = matches.first() {
                if row.try_get::<i64, _>("id")? != id {
                    return Err(DbError::Conflict {
                        message: "Email is taken!",
                    });
                }
            }
        }

        let (set_clause, values) = changes.set_clause();
        let sql = format!(
            "UPDATE clients SET {set_clause} WHERE id = ${}",
            values.len() + 1
        );

        let mut query = sqlx::query(&sql);
        for value in values {
            query = query.bind(value);
        }
        query.bind(id).execute(&mut *self.conn).await?;

        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, email, created_at FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(client)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let existing = sqlx::query("SELECT id FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        if existing.is_none() {
            return Err(DbError::NotFound {
                message: "Client not found",
            });
        }

        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }
}
