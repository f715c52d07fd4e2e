//! # cinevault-entity
//!
//! Domain entity models for CineVault. Every struct in this crate
//! represents a database table row or a value object used to create or
//! update one. All row entities derive `Debug`, `Clone`, `Serialize`,
//! `Deserialize`, and `sqlx::FromRow`.
//!
//! Rows are never physically deleted: the `state` flag distinguishes live
//! rows from soft-deleted ones, and every read path filters on it.

pub mod actor;
pub mod director;
pub mod genre;
pub mod movie;

pub use actor::Actor;
pub use director::Director;
pub use genre::Genre;
pub use movie::{Movie, MovieWithRelations};
