pub mod config;
pub mod page;
pub mod server;
pub mod summarize;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
}

static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com|youtu\.be)/(?:watch\?v=|embed/|v/)?([A-Za-z0-9_-]{11})(?:$|[^A-Za-z0-9_-])",
    )
    .expect("video URL pattern compiles")
});

/// Extract the 11-character video ID from a YouTube URL.
///
/// Accepts `watch?v=`, `embed/`, `v/` and bare-path forms on `youtube.com` (with
/// optional `www.` or `m.` subdomain) plus `youtu.be` short links, with or without
/// scheme. The match is anchored at the start of the string; anything else is `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_URL_RE.captures(url).map(|caps| caps[1].to_string())
}
