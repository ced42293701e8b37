//! Hero banner selection
//!
//! Decides the single promotional video and caption set shown on the home
//! page. Evaluated as an ordered fallback chain, first satisfied branch
//! wins: manual override, featured entry's trailer, featured entry's
//! primary video, nothing. "Nothing configured" is a distinct terminal
//! state, not an error; backend failures are surfaced separately by the
//! caller so the UI can tell the two apart.

use serde::Serialize;

use crate::resolver::extract_youtube_id;
use crate::types::{CatalogEntry, HeroOverride};

/// Which field of the featured entry feeds the hero player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroSource {
    Trailer(String),
    Primary(String),
}

impl HeroSource {
    pub fn url(&self) -> &str {
        match self {
            HeroSource::Trailer(url) | HeroSource::Primary(url) => url,
        }
    }
}

/// Resolved hero banner content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeroContent {
    /// Admin-configured override, fields used verbatim
    Override {
        youtube_url: String,
        title: String,
        description: String,
        watch_now_url: String,
        more_info_url: String,
    },
    /// Featured catalog entry; both action links point at its watch route
    Featured {
        entry_id: String,
        source: HeroSource,
        title: String,
        description: String,
        watch_now_url: String,
        more_info_url: String,
    },
    /// Nothing configured. The caller renders an explicit no-content
    /// state, never a blank player.
    Empty,
}

impl HeroContent {
    /// The raw source URL feeding the player, if any
    pub fn source_url(&self) -> Option<&str> {
        match self {
            HeroContent::Override { youtube_url, .. } => Some(youtube_url),
            HeroContent::Featured { source, .. } => Some(source.url()),
            HeroContent::Empty => None,
        }
    }

    /// YouTube id of the source, if the source is a well-formed YouTube URL
    ///
    /// `None` on a non-empty hero means the caller should render an
    /// invalid-trailer state rather than attempt playback.
    pub fn video_id(&self) -> Option<String> {
        self.source_url().and_then(extract_youtube_id)
    }
}

/// The route a featured entry's hero links point at
pub fn watch_route(entry_id: &str) -> String {
    format!("/watch/{entry_id}")
}

/// Selects hero content from the override singleton and the featured entry
///
/// Pure: the caller is responsible for fetching both inputs (and for
/// mapping fetch failures to a distinct error state). Ties between multiple
/// featured entries are broken by the repository's featured query
/// (most-recently-created wins) before this function runs.
pub fn select_hero(
    override_record: Option<&HeroOverride>,
    featured: Option<&CatalogEntry>,
) -> HeroContent {
    if let Some(over) = override_record
        && over.manual_override
        && !over.youtube_url.trim().is_empty()
    {
        return HeroContent::Override {
            youtube_url: over.youtube_url.clone(),
            title: over.movie_title.clone(),
            description: over.description.clone(),
            watch_now_url: over.watch_now_url.clone(),
            more_info_url: over.more_info_url.clone(),
        };
    }

    let Some(entry) = featured else {
        return HeroContent::Empty;
    };

    let watch = watch_route(&entry.id);

    if let Some(ref trailer) = entry.trailer_url
        && !trailer.trim().is_empty()
    {
        return HeroContent::Featured {
            entry_id: entry.id.clone(),
            source: HeroSource::Trailer(trailer.clone()),
            title: entry.title.clone(),
            description: entry.description.clone(),
            watch_now_url: watch.clone(),
            more_info_url: watch,
        };
    }

    if !entry.video_url.trim().is_empty() {
        return HeroContent::Featured {
            entry_id: entry.id.clone(),
            source: HeroSource::Primary(entry.video_url.clone()),
            title: entry.title.clone(),
            description: entry.description.clone(),
            watch_now_url: watch.clone(),
            more_info_url: watch,
        };
    }

    HeroContent::Empty
}
