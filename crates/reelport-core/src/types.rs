//! Core data types for the reelport catalog
//!
//! Contains the catalog entry model, the singleton site configuration
//! records, and the derived download-link shape used by the download page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReelportError, Result};

/// Content category a catalog entry belongs to
///
/// Serialized lowercase to match the backend's document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Latest,
    Trending,
    Webseries,
    Movies,
    Livetv,
}

impl Category {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Latest => "latest",
            Category::Trending => "trending",
            Category::Webseries => "webseries",
            Category::Movies => "movies",
            Category::Livetv => "livetv",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ReelportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(Category::Latest),
            "trending" => Ok(Category::Trending),
            "webseries" => Ok(Category::Webseries),
            "movies" => Ok(Category::Movies),
            "livetv" => Ok(Category::Livetv),
            other => Err(ReelportError::Validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

/// One piece of content in the catalog: a movie, an episode bundle,
/// or a live-channel stub
///
/// Authored by administrators; the browsing flow never mutates it.
/// All URL fields are externally-authored strings and must be run through
/// [`crate::resolver`] before playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Opaque stable id assigned by the backend
    pub id: String,

    /// Display title, non-empty
    pub title: String,

    /// Synopsis, may be empty
    #[serde(default)]
    pub description: String,

    /// Poster image URL; absent means the view renders a placeholder
    #[serde(default)]
    pub poster_url: Option<String>,

    /// Primary playable source URL
    pub video_url: String,

    /// Optional promotional clip URL
    #[serde(default)]
    pub trailer_url: Option<String>,

    /// Optional download source URL (single URL for all quality tiers)
    #[serde(default)]
    pub download_url: Option<String>,

    /// Free-form genre text (e.g. "Action", "Sci-Fi / Thriller")
    #[serde(default)]
    pub genre: String,

    /// Category bucket the entry was filed under
    pub category: Category,

    /// Rating on a 0-10 scale
    #[serde(default)]
    pub rating: Option<f64>,

    /// Release year
    #[serde(default)]
    pub release_year: Option<i32>,

    /// Free-form duration display text (e.g. "2h 15m")
    #[serde(default)]
    pub duration: Option<String>,

    /// Audio language
    #[serde(default)]
    pub language: Option<String>,

    /// Comma-joined tag list
    #[serde(default)]
    pub tags: Option<String>,

    /// Marks the entry as a hero-banner candidate
    #[serde(default)]
    pub is_featured: bool,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,

    /// Server-assigned last-update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a catalog entry
///
/// Validated locally before any repository call so a partially-invalid
/// write never reaches the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    pub video_url: String,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub genre: String,
    pub category: Option<Category>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl NewCatalogEntry {
    /// Check required fields and value ranges
    ///
    /// # Errors
    /// Returns `Validation` naming the first offending field:
    /// - empty/whitespace title
    /// - empty/whitespace video URL
    /// - missing category
    /// - rating outside 0..=10
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ReelportError::Validation("title is required".to_string()));
        }
        if self.video_url.trim().is_empty() {
            return Err(ReelportError::Validation(
                "video URL is required".to_string(),
            ));
        }
        if self.category.is_none() {
            return Err(ReelportError::Validation(
                "category is required".to_string(),
            ));
        }
        if let Some(rating) = self.rating
            && !(0.0..=10.0).contains(&rating)
        {
            return Err(ReelportError::Validation(format!(
                "rating must be between 0 and 10, got {rating}"
            )));
        }
        Ok(())
    }
}

/// Partial update payload; `None` fields are left untouched by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl CatalogEntryPatch {
    /// Check value ranges on the fields that are present
    pub fn validate(&self) -> Result<()> {
        if let Some(ref title) = self.title
            && title.trim().is_empty()
        {
            return Err(ReelportError::Validation(
                "title cannot be empty".to_string(),
            ));
        }
        if let Some(ref video_url) = self.video_url
            && video_url.trim().is_empty()
        {
            return Err(ReelportError::Validation(
                "video URL cannot be empty".to_string(),
            ));
        }
        if let Some(rating) = self.rating
            && !(0.0..=10.0).contains(&rating)
        {
            return Err(ReelportError::Validation(format!(
                "rating must be between 0 and 10, got {rating}"
            )));
        }
        Ok(())
    }
}

/// Singleton hero-banner override record, admin-edited
///
/// When `manual_override` is true and `youtube_url` is non-empty it takes
/// precedence over any featured catalog entry for hero display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroOverride {
    #[serde(default)]
    pub youtube_url: String,
    #[serde(default)]
    pub movie_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub watch_now_url: String,
    #[serde(default)]
    pub more_info_url: String,
    #[serde(default)]
    pub manual_override: bool,
}

/// Splash-screen display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplashMode {
    #[default]
    Image,
    Video,
}

/// Splash-screen configuration embedded in [`SiteBranding`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mode: SplashMode,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    /// CSS object-fit keyword applied to the splash media
    #[serde(default)]
    pub object_fit: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u32>,
}

/// Corner position for the in-player overlay logo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayCorner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Singleton site branding record, admin-edited, read-only to the core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBranding {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub hero_logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub splash: SplashConfig,
    /// Theme colors keyed by slot name (e.g. "primary", "accent")
    #[serde(default)]
    pub theme_colors: std::collections::BTreeMap<String, String>,
    /// Footer/social links as (label, url) pairs
    #[serde(default)]
    pub footer_links: Vec<(String, String)>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub overlay_logo_url: Option<String>,
    #[serde(default)]
    pub overlay_corner: OverlayCorner,
}

/// Download quality tier label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "480p")]
    Q480p,
    #[serde(rename = "720p")]
    Q720p,
    #[serde(rename = "1080p")]
    Q1080p,
}

impl Quality {
    /// All tiers offered by the download page, lowest first
    pub const ALL: [Quality; 3] = [Quality::Q480p, Quality::Q720p, Quality::Q1080p];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Q480p => "480p",
            Quality::Q720p => "720p",
            Quality::Q1080p => "1080p",
        }
    }

    /// Display size shown next to the tier. The underlying data stores a
    /// single URL, so sizes are fixed labels, not measured values.
    pub fn display_size(&self) -> &'static str {
        match self {
            Quality::Q480p => "450 MB",
            Quality::Q720p => "1.2 GB",
            Quality::Q1080p => "2.4 GB",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived download-page row: one quality tier pointing at the entry's
/// single download URL
///
/// Not persisted. The per-quality split is presentational; the data model
/// stores one URL replicated across the three labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub quality: Quality,
    pub url: String,
    pub size: String,
}

impl DownloadLink {
    /// Build the tier rows for an entry
    ///
    /// Returns an empty vec when the entry has no download URL, so the
    /// download page can render a "no downloads" state.
    pub fn tiers_for(entry: &CatalogEntry) -> Vec<DownloadLink> {
        let Some(ref url) = entry.download_url else {
            return Vec::new();
        };
        if url.trim().is_empty() {
            return Vec::new();
        }
        Quality::ALL
            .iter()
            .map(|quality| DownloadLink {
                quality: *quality,
                url: url.clone(),
                size: quality.display_size().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> CatalogEntry {
        CatalogEntry {
            id: "abc123".to_string(),
            title: "Test Movie".to_string(),
            description: "A movie for tests".to_string(),
            poster_url: Some("https://img.example/poster.jpg".to_string()),
            video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            trailer_url: None,
            download_url: Some("https://cdn.example/movie.mp4".to_string()),
            genre: "Action".to_string(),
            category: Category::Movies,
            rating: Some(8.5),
            release_year: Some(2023),
            duration: Some("2h 15m".to_string()),
            language: Some("English".to_string()),
            tags: Some("action,thriller".to_string()),
            is_featured: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_catalog_entry_roundtrip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).expect("Serialization should succeed");
        let deserialized: CatalogEntry =
            serde_json::from_str(&json).expect("Deserialization should succeed");
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_catalog_entry_camel_case_fields() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"videoUrl\""));
        assert!(json.contains("\"isFeatured\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_catalog_entry_optional_fields_default() {
        let json = r#"{
            "id": "x1",
            "title": "Bare",
            "videoUrl": "https://example.com/v.mp4",
            "category": "livetv",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, Category::Livetv);
        assert!(entry.description.is_empty());
        assert_eq!(entry.rating, None);
        assert!(!entry.is_featured);
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("movies".parse::<Category>().unwrap(), Category::Movies);
        assert_eq!(" Webseries ".parse::<Category>().unwrap(), Category::Webseries);
        assert_eq!(Category::Latest.to_string(), "latest");
        assert!("documentary".parse::<Category>().is_err());
    }

    #[test]
    fn test_new_entry_validate_ok() {
        let entry = NewCatalogEntry {
            title: "T".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            category: Some(Category::Movies),
            rating: Some(7.0),
            ..Default::default()
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_new_entry_validate_empty_title() {
        let entry = NewCatalogEntry {
            title: "   ".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            category: Some(Category::Movies),
            ..Default::default()
        };
        match entry.validate() {
            Err(ReelportError::Validation(msg)) => assert!(msg.contains("title")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_entry_validate_missing_category() {
        let entry = NewCatalogEntry {
            title: "T".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            category: None,
            ..Default::default()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_new_entry_validate_rating_out_of_range() {
        let entry = NewCatalogEntry {
            title: "T".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            category: Some(Category::Movies),
            rating: Some(11.0),
            ..Default::default()
        };
        match entry.validate() {
            Err(ReelportError::Validation(msg)) => assert!(msg.contains("rating")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = CatalogEntryPatch {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"title":"New title"}"#);
    }

    #[test]
    fn test_patch_validate_empty_video_url() {
        let patch = CatalogEntryPatch {
            video_url: Some("".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_download_links_replicate_single_url() {
        let entry = sample_entry();
        let links = DownloadLink::tiers_for(&entry);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].quality, Quality::Q480p);
        assert_eq!(links[2].quality, Quality::Q1080p);
        assert!(links.iter().all(|l| l.url == "https://cdn.example/movie.mp4"));
    }

    #[test]
    fn test_download_links_absent_url() {
        let mut entry = sample_entry();
        entry.download_url = None;
        assert!(DownloadLink::tiers_for(&entry).is_empty());

        entry.download_url = Some("   ".to_string());
        assert!(DownloadLink::tiers_for(&entry).is_empty());
    }

    #[test]
    fn test_quality_serde_labels() {
        let json = serde_json::to_string(&Quality::Q720p).unwrap();
        assert_eq!(json, "\"720p\"");
        let q: Quality = serde_json::from_str("\"1080p\"").unwrap();
        assert_eq!(q, Quality::Q1080p);
    }

    #[test]
    fn test_branding_default_roundtrip() {
        let branding = SiteBranding::default();
        let json = serde_json::to_string(&branding).unwrap();
        let back: SiteBranding = serde_json::from_str(&json).unwrap();
        assert_eq!(branding, back);
        assert_eq!(back.overlay_corner, OverlayCorner::TopRight);
    }

    #[test]
    fn test_hero_override_defaults() {
        let json = r#"{"manualOverride": true, "youtubeUrl": "https://youtu.be/dQw4w9WgXcQ"}"#;
        let over: HeroOverride = serde_json::from_str(json).unwrap();
        assert!(over.manual_override);
        assert!(over.movie_title.is_empty());
    }
}
