//! itemctl-server: HTTP server for a single "item" resource
//!
//! Exposes create/read/update/delete over `/items` plus a `/health`
//! check, backed by a SQLite store through sqlx.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, ItemRepo, PoolConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Item, ItemCreate, ListParams, ListWindow};
