//! Google Drive, Vimeo and Dailymotion URL normalization
//!
//! Each resolver takes an arbitrary externally-authored URL and returns
//! either a normalized playable form or the input unchanged. "Could not
//! resolve" is signaled by identity, never by an error, so views can render
//! an invalid-source state without crashing.

use regex::Regex;

/// File suffixes treated as directly playable without normalization
const DIRECT_VIDEO_SUFFIXES: [&str; 4] = [".mp4", ".m3u8", ".webm", ".ogv"];

/// Checks whether a URL already points at a directly playable video file
///
/// True for the known video suffixes (query string ignored) and for
/// `googlevideo.com` hosts, which serve raw streams.
pub fn is_direct_video_url(url: &str) -> bool {
    if url.contains("googlevideo.com") {
        return true;
    }
    let path = url.split(['?', '#']).next().unwrap_or(url).to_lowercase();
    DIRECT_VIDEO_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix))
}

/// Normalizes a Google Drive share URL to its direct "view" form
///
/// Extracts the file id from either the path form `/file/d/<id>/...` or the
/// query form `?id=<id>` and returns
/// `https://drive.google.com/uc?export=view&id=<id>`.
///
/// Direct video files pass through unchanged, as do Drive URLs with no
/// extractable id. The view layer decides whether to turn the normalized
/// form into an iframe `/preview` embed; this function only normalizes.
///
/// # Example
/// ```
/// use reelport_core::resolver::resolve_google_drive_url;
/// let url = resolve_google_drive_url("https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing");
/// assert_eq!(url, "https://drive.google.com/uc?export=view&id=1A2b3C4d5E");
/// ```
pub fn resolve_google_drive_url(url: &str) -> String {
    if is_direct_video_url(url) {
        return url.to_string();
    }

    if let Some(id) = extract_drive_file_id(url) {
        return format!("https://drive.google.com/uc?export=view&id={id}");
    }

    url.to_string()
}

/// Extracts a Drive file id from `/file/d/<id>/` or `[?&]id=<id>` forms
fn extract_drive_file_id(url: &str) -> Option<String> {
    let Ok(path_re) = Regex::new(r"/file/d/([^/?#&]+)") else {
        return None;
    };
    if let Some(caps) = path_re.captures(url) {
        return Some(caps.get(1)?.as_str().to_string());
    }

    let Ok(query_re) = Regex::new(r"[?&]id=([^&#]+)") else {
        return None;
    };
    query_re
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Normalizes a Vimeo page URL to the player embed form
///
/// `vimeo.com/<digits>` becomes `https://player.vimeo.com/video/<digits>`;
/// anything else (including already-embedded player URLs) is returned
/// unchanged.
pub fn resolve_vimeo_url(url: &str) -> String {
    let Ok(re) = Regex::new(r"vimeo\.com/(\d+)") else {
        return url.to_string();
    };
    match re.captures(url).and_then(|caps| caps.get(1)) {
        Some(id) => format!("https://player.vimeo.com/video/{}", id.as_str()),
        None => url.to_string(),
    }
}

/// Normalizes a Dailymotion page URL to the embed form
///
/// Extracts the id from `dailymotion.com/video/<id>` (the id runs up to the
/// first underscore, which starts the SEO slug) and returns
/// `https://www.dailymotion.com/embed/video/<id>`; anything else is
/// returned unchanged.
pub fn resolve_dailymotion_url(url: &str) -> String {
    let Ok(re) = Regex::new(r"dailymotion\.com/video/([^_/?#&]+)") else {
        return url.to_string();
    };
    match re.captures(url).and_then(|caps| caps.get(1)) {
        Some(id) => format!("https://www.dailymotion.com/embed/video/{}", id.as_str()),
        None => url.to_string(),
    }
}
