//! # cinevault-database
//!
//! PostgreSQL access for CineVault: connection pool management, the
//! migration runner, and one repository per catalog entity.
//!
//! Repositories own the soft-delete semantics: every read they expose
//! filters `state = TRUE`, and Delete flips the flag instead of removing
//! rows.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
