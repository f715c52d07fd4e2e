//! # cinevault-media
//!
//! Client for the third-party image host that serves avatar and poster
//! images. Uploads carry a base64 PNG payload as a data URI plus a named
//! upload preset; the host answers with a permanent secure URL.

pub mod client;
pub mod url;

pub use client::{MediaClient, UploadPreset};
pub use url::is_secure_url;
