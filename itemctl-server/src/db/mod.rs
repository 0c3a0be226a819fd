//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool, one connection checked out per request
//! - One statement per repository call, no multi-step transactions
//! - Absence is `Ok(None)`, never an error

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, PoolConfig};
pub use repos::*;
pub use schema::ensure_schema;
