//! Catalog filtering and category bucketing
//!
//! Pure functions deriving the listing-page views from a flat catalog
//! snapshot. Input order is owned by the backing store (creation timestamp
//! descending); these functions never mutate or reorder beyond truncation.

use crate::types::{CatalogEntry, Category};

/// Row caps for the home-page grids
pub const LATEST_CAP: usize = 12;
pub const WEBSERIES_CAP: usize = 12;
pub const TRENDING_CAP: usize = 12;
pub const TOP_PICKS_CAP: usize = 10;

/// Minimum rating for the top-picks row
pub const TOP_PICKS_MIN_RATING: f64 = 8.0;

/// Default page size for content-type browsing
pub const DEFAULT_BROWSE_COUNT: usize = 20;

/// Named home-page buckets derived from one catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct CategoryBuckets {
    /// Category `latest` or `movies`, first 12 in input order
    pub latest: Vec<CatalogEntry>,
    /// Category `webseries`, first 12
    pub webseries: Vec<CatalogEntry>,
    /// First 12 of the full input regardless of category. Trending is
    /// positionally defined, not tag-defined; callers must not "fix" this.
    pub trending: Vec<CatalogEntry>,
    /// Entries with a rating of at least 8, first 10
    pub top_picks: Vec<CatalogEntry>,
}

/// Case-insensitive substring search over title and genre
///
/// An empty or whitespace-only query returns the full input unchanged,
/// same order.
pub fn filter_by_search(entries: &[CatalogEntry], query: &str) -> Vec<CatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.genre.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Buckets a flat entry list into the home-page rows
pub fn bucket_by_category(entries: &[CatalogEntry]) -> CategoryBuckets {
    let latest = entries
        .iter()
        .filter(|e| matches!(e.category, Category::Latest | Category::Movies))
        .take(LATEST_CAP)
        .cloned()
        .collect();

    let webseries = entries
        .iter()
        .filter(|e| e.category == Category::Webseries)
        .take(WEBSERIES_CAP)
        .cloned()
        .collect();

    let trending = entries.iter().take(TRENDING_CAP).cloned().collect();

    let top_picks = entries
        .iter()
        .filter(|e| e.rating.is_some_and(|r| r >= TOP_PICKS_MIN_RATING))
        .take(TOP_PICKS_CAP)
        .cloned()
        .collect();

    CategoryBuckets {
        latest,
        webseries,
        trending,
        top_picks,
    }
}

/// Selects up to `count` entries for a content-type listing
///
/// `None` means "all": the first `count` entries of the (most-recent-first)
/// input. Otherwise only entries whose category equals `content_type`
/// exactly. `count` defaults to [`DEFAULT_BROWSE_COUNT`] when `None`.
pub fn by_content_type(
    entries: &[CatalogEntry],
    content_type: Option<Category>,
    count: Option<usize>,
) -> Vec<CatalogEntry> {
    let count = count.unwrap_or(DEFAULT_BROWSE_COUNT);
    match content_type {
        None => entries.iter().take(count).cloned().collect(),
        Some(category) => entries
            .iter()
            .filter(|e| e.category == category)
            .take(count)
            .cloned()
            .collect(),
    }
}
