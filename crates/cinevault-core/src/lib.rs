//! # cinevault-core
//!
//! Core crate for CineVault. Contains configuration schemas, the response
//! envelope, pagination and date types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CineVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
