//! YouTube id extraction and embed URL construction
//!
//! Handles every externally-authored YouTube URL shape the catalog has been
//! seen to contain: short links, watch pages, legacy `/v/` and `/u/` paths,
//! and already-embedded URLs.

use regex::Regex;

/// YouTube video ids are always exactly 11 characters
const YOUTUBE_ID_LEN: usize = 11;

/// Extracts the 11-character video id from a YouTube URL
///
/// Recognized shapes:
/// - `youtu.be/<id>`
/// - `/v/<id>`
/// - `/u/<x>/<id>`
/// - `/embed/<id>`
/// - `watch?v=<id>`
/// - `&v=<id>`
///
/// # Arguments
/// * `url` - Arbitrary externally-authored URL string
///
/// # Returns
/// `Some(id)` only when a candidate of exactly 11 characters is found,
/// `None` for anything else. Never panics on malformed or empty input.
///
/// # Example
/// ```
/// use reelport_core::resolver::extract_youtube_id;
/// let id = extract_youtube_id("https://youtu.be/dQw4w9WgXcQ");
/// assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
/// ```
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let Ok(re) =
        Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|watch\?v=|&v=)([^#&?/\s]*)")
    else {
        return None;
    };

    let candidate = re.captures(url)?.get(1)?.as_str();
    if candidate.len() == YOUTUBE_ID_LEN {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Player behavior flags for a built embed URL
///
/// Defaults to a plain embed with no query parameters. The hero banner
/// uses [`EmbedOptions::hero`], an autoplaying muted loop with chrome
/// stripped down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub mute: bool,
    pub loop_playback: bool,
    pub hide_controls: bool,
}

impl EmbedOptions {
    /// Preset used for the home-page hero banner
    pub fn hero() -> Self {
        Self {
            autoplay: true,
            mute: true,
            loop_playback: true,
            hide_controls: true,
        }
    }
}

/// Builds a `https://www.youtube.com/embed/<id>` URL for iframe use
///
/// Query parameters are emitted in a fixed order so the output is
/// deterministic for the same id and options. Looping requires YouTube's
/// `playlist=<id>` trick alongside `loop=1`.
///
/// # Example
/// ```
/// use reelport_core::resolver::{build_youtube_embed_url, EmbedOptions};
/// let url = build_youtube_embed_url("dQw4w9WgXcQ", &EmbedOptions::default());
/// assert_eq!(url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
/// ```
pub fn build_youtube_embed_url(id: &str, opts: &EmbedOptions) -> String {
    let mut params: Vec<String> = Vec::new();

    if opts.autoplay {
        params.push("autoplay=1".to_string());
    }
    if opts.mute {
        params.push("mute=1".to_string());
    }
    if opts.loop_playback {
        params.push("loop=1".to_string());
        params.push(format!("playlist={id}"));
    }
    if opts.hide_controls {
        params.push("controls=0".to_string());
        params.push("modestbranding=1".to_string());
        params.push("rel=0".to_string());
        params.push("showinfo=0".to_string());
    }

    if params.is_empty() {
        format!("https://www.youtube.com/embed/{id}")
    } else {
        format!("https://www.youtube.com/embed/{}?{}", id, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_short_link() {
        let id = extract_youtube_id("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_watch_url() {
        let id = extract_youtube_id("https://www.youtube.com/watch?v=abc12345678");
        assert_eq!(id.as_deref(), Some("abc12345678"));
    }

    #[test]
    fn test_extract_watch_url_with_extra_params() {
        let id = extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s");
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_ampersand_v_param() {
        let id = extract_youtube_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ");
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_embed_url() {
        let id = extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_legacy_v_path() {
        let id = extract_youtube_id("https://www.youtube.com/v/dQw4w9WgXcQ?version=3");
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_user_path() {
        let id = extract_youtube_id("https://www.youtube.com/u/1/dQw4w9WgXcQ");
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_rejects_wrong_length() {
        assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
        assert_eq!(
            extract_youtube_id("https://youtu.be/waytoolongforanyid"),
            None
        );
    }

    #[test]
    fn test_extract_rejects_unrelated_input() {
        assert_eq!(extract_youtube_id(""), None);
        assert_eq!(extract_youtube_id("not a url"), None);
        assert_eq!(extract_youtube_id("https://vimeo.com/123456"), None);
    }

    #[test]
    fn test_embed_url_plain() {
        let url = build_youtube_embed_url("dQw4w9WgXcQ", &EmbedOptions::default());
        assert_eq!(url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn test_embed_url_hero_preset() {
        let url = build_youtube_embed_url("dQw4w9WgXcQ", &EmbedOptions::hero());
        assert_eq!(
            url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&mute=1&loop=1&playlist=dQw4w9WgXcQ&controls=0&modestbranding=1&rel=0&showinfo=0"
        );
    }

    #[test]
    fn test_embed_url_deterministic() {
        let opts = EmbedOptions {
            autoplay: true,
            loop_playback: true,
            ..Default::default()
        };
        let a = build_youtube_embed_url("abc12345678", &opts);
        let b = build_youtube_embed_url("abc12345678", &opts);
        assert_eq!(a, b);
        assert_eq!(
            a,
            "https://www.youtube.com/embed/abc12345678?autoplay=1&loop=1&playlist=abc12345678"
        );
    }

    #[test]
    fn test_embed_url_reextracts_same_id() {
        let url = build_youtube_embed_url("dQw4w9WgXcQ", &EmbedOptions::hero());
        assert_eq!(extract_youtube_id(&url).as_deref(), Some("dQw4w9WgXcQ"));
    }
}
