//! Media host (image upload) configuration.

use serde::{Deserialize, Serialize};

/// Settings for the third-party image host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Base URL of the upload API, e.g. `https://api.media.example/v1/demo`.
    pub upload_url: String,
    /// Request timeout for a single upload, in seconds.
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_seconds: u64,
}

fn default_upload_timeout() -> u64 {
    30
}
