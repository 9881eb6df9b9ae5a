//! Database layer - connection pool, lookup helper, and the client repository
//!
//! # Design Principles
//!
//! - Connection pool with a bounded acquire timeout - no unbounded waits
//! - One scoped connection per request, released on every exit path
//! - Uniqueness and existence checks run as separate statements before the
//!   write; there is no enclosing transaction, so concurrent writers can
//!   race past the check (see `repos::clients`)

pub mod lookup;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use lookup::find_rows;
pub use pool::create_pool;
pub use repos::*;
