//! Secure-URL detection for avatar/poster fields.

/// True when the content is already a fully-qualified `https` URL.
///
/// Avatar and poster fields carry either a hosted URL or inline base64
/// image data; this is how the two are told apart. Content that is
/// already a URL must never be re-uploaded.
pub fn is_secure_url(content: &str) -> bool {
    content.starts_with("https://") && reqwest::Url::parse(content).is_ok()
}
