//! Video source resolution for externally-authored URLs
//!
//! Converts catalog video URLs (YouTube, Google Drive, Vimeo, Dailymotion,
//! direct files) into playable embed URLs. Provider detection is an ordered
//! strategy table evaluated first-match-wins on host/path substrings. The
//! order matters because a URL can coincidentally match a later pattern, so
//! precedence is kept explicit and test-visible here rather than scattered
//! through call sites.
//!
//! Resolution never fails: unrecognized or malformed input passes through
//! unchanged, and id extraction returns `None`.

mod providers;
mod youtube;

pub use providers::{
    is_direct_video_url, resolve_dailymotion_url, resolve_google_drive_url, resolve_vimeo_url,
};
pub use youtube::{EmbedOptions, build_youtube_embed_url, extract_youtube_id};

/// Video providers the resolver understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    GoogleDrive,
    Vimeo,
    Dailymotion,
}

/// One row of the dispatch table: a substring predicate and the resolver
/// applied when it matches
pub struct ProviderRule {
    pub provider: Provider,
    matches: fn(&str) -> bool,
    resolve: fn(&str) -> String,
}

/// YouTube URLs resolve to a plain `/embed/<id>` URL; failed id extraction
/// leaves the input unchanged
fn resolve_youtube_url(url: &str) -> String {
    match extract_youtube_id(url) {
        Some(id) => build_youtube_embed_url(&id, &EmbedOptions::default()),
        None => url.to_string(),
    }
}

/// The dispatch table, in precedence order: YouTube, Google Drive, Vimeo,
/// Dailymotion. Anything unmatched passes through unchanged.
pub const PROVIDER_RULES: [ProviderRule; 4] = [
    ProviderRule {
        provider: Provider::YouTube,
        matches: |url| url.contains("youtube.com") || url.contains("youtu.be"),
        resolve: resolve_youtube_url,
    },
    ProviderRule {
        provider: Provider::GoogleDrive,
        matches: |url| url.contains("drive.google.com") || url.contains("googlevideo.com"),
        resolve: resolve_google_drive_url,
    },
    ProviderRule {
        provider: Provider::Vimeo,
        matches: |url| url.contains("vimeo.com"),
        resolve: resolve_vimeo_url,
    },
    ProviderRule {
        provider: Provider::Dailymotion,
        matches: |url| url.contains("dailymotion.com"),
        resolve: resolve_dailymotion_url,
    },
];

/// Identifies which provider (if any) would handle a URL
pub fn detect_provider(url: &str) -> Option<Provider> {
    PROVIDER_RULES
        .iter()
        .find(|rule| (rule.matches)(url))
        .map(|rule| rule.provider)
}

/// Converts an arbitrary video URL into an iframe/player-embeddable form
///
/// Dispatches through [`PROVIDER_RULES`] first-match-wins; unmatched input
/// passes through unchanged. Idempotent for every supported provider:
/// applying it twice yields the same result as applying it once.
///
/// # Example
/// ```
/// use reelport_core::resolver::convert_to_embeddable;
/// let url = convert_to_embeddable("https://youtu.be/dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
/// ```
pub fn convert_to_embeddable(url: &str) -> String {
    for rule in &PROVIDER_RULES {
        if (rule.matches)(url) {
            return (rule.resolve)(url);
        }
    }
    url.to_string()
}
