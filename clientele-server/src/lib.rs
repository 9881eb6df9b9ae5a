//! clientele-server: HTTP CRUD service for client records
//!
//! Exposes create/read/update/delete on the `clients` table of a remote
//! SQL warehouse. Each request acquires one pooled connection, runs its
//! statements serially on it, and releases it on every exit path.

pub mod db;
pub mod http;

pub use http::{run_server, ApiError, ServerConfig};
