//! Repository implementations for database access
//!
//! Pre-checks (existence, email uniqueness) run as separate statements
//! before the write on the same scoped connection. There is no enclosing
//! transaction, so two concurrent writers can both pass a check.

pub mod clients;

pub use clients::{Client, ClientChanges, ClientRepo, DbError};
