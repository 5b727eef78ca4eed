//! Video link resolution.
//!
//! A submission stores the URL exactly as the user typed it, plus the canonical
//! video id extracted here. Duplicate detection compares canonical ids, so
//! `youtu.be/abc123` and `youtube.com/watch?v=abc123&t=42` are the same video.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Canonical, platform-specific video identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps an already-canonical id. Returns `None` for strings that cannot be a video id.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= 64
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    pub fn thumbnail_url(&self, quality: ThumbnailQuality) -> String {
        format!("https://img.youtube.com/vi/{}/{}.jpg", self.0, quality.file_stem())
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Thumbnail sizes served by the platform's image CDN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThumbnailQuality {
    Default,
    Medium,
    #[default]
    High,
    Standard,
    MaxRes,
}

impl ThumbnailQuality {
    fn file_stem(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Standard => "sddefault",
            Self::MaxRes => "maxresdefault",
        }
    }
}

/// Turns a user-supplied link into a canonical video id.
pub trait LinkResolver: Send + Sync {
    /// Returns `None` for anything that is not a supported link, including malformed URLs.
    fn resolve(&self, url: &str) -> Option<VideoId>;
}

/// Resolver for YouTube links.
///
/// Recognized forms:
/// - `https://www.youtube.com/watch?v=ID`
/// - `https://youtu.be/ID`
/// - `https://www.youtube.com/embed/ID`
/// - `https://www.youtube.com/v/ID`
#[derive(Clone, Copy, Debug, Default)]
pub struct YouTubeResolver;

impl YouTubeResolver {
    fn is_youtube_host(host: &str) -> bool {
        ["youtube.com", "youtube-nocookie.com"]
            .iter()
            .any(|base| host == *base || host.ends_with(&format!(".{base}")))
    }
}

impl LinkResolver for YouTubeResolver {
    fn resolve(&self, url: &str) -> Option<VideoId> {
        let parsed = Url::parse(url.trim()).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?.to_ascii_lowercase();

        if host == "youtu.be" || host == "www.youtu.be" {
            let id = parsed.path_segments()?.next()?;
            return VideoId::parse(id);
        }

        if !Self::is_youtube_host(&host) {
            return None;
        }

        if let Some((_, v)) = parsed.query_pairs().find(|(key, _)| key == "v") {
            return VideoId::parse(&v);
        }

        let mut segments = parsed.path_segments()?;
        match (segments.next(), segments.next()) {
            (Some("embed" | "v"), Some(id)) => VideoId::parse(id),
            _ => None,
        }
    }
}
