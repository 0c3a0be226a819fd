//! Repository implementations for database access
//!
//! Repositories borrow a single connection for their lifetime, so a
//! request never touches more than the one session it checked out.

pub mod items;

pub use items::ItemRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
