//! In-process repositories
//!
//! Back the same traits as the REST repositories with an in-memory store.
//! Used by portal tests and for local development without a provisioned
//! backend. Entries are kept most-recent-first, matching the ordering
//! contract the managed backend's queries provide.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{ReelportError, Result};
use crate::types::{
    CatalogEntry, CatalogEntryPatch, Category, HeroOverride, NewCatalogEntry, SiteBranding,
};

use crate::repository::{CatalogRepository, ConfigRepository};

/// In-memory catalog store, most-recent-first
#[derive(Default)]
pub struct MemoryCatalogRepository {
    entries: RwLock<Vec<CatalogEntry>>,
    next_id: AtomicU64,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing entries (assumed most-recent-first)
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            next_id: AtomicU64::new(0),
        }
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    async fn list_all(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CatalogEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn list_by_category(&self, category: Category, limit: usize) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.category == category)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_featured(&self) -> Result<Option<CatalogEntry>> {
        // Most-recently-created wins when several entries are flagged;
        // the store is ordered, so the first flagged entry is the winner.
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|e| e.is_featured)
            .cloned())
    }

    async fn list_related(
        &self,
        category: Category,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.category == category && e.id != exclude_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, entry: &NewCatalogEntry) -> Result<String> {
        let id = format!("mem{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let now = Utc::now();
        let record = CatalogEntry {
            id: id.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            poster_url: entry.poster_url.clone(),
            video_url: entry.video_url.clone(),
            trailer_url: entry.trailer_url.clone(),
            download_url: entry.download_url.clone(),
            genre: entry.genre.clone(),
            category: entry.category.ok_or_else(|| {
                ReelportError::Validation("category is required".to_string())
            })?,
            rating: entry.rating,
            release_year: entry.release_year,
            duration: entry.duration.clone(),
            language: entry.language.clone(),
            tags: entry.tags.clone(),
            is_featured: entry.is_featured,
            created_at: now,
            updated_at: now,
        };
        // Newest entries go to the front to preserve the ordering contract
        self.entries.write().await.insert(0, record);
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &CatalogEntryPatch) -> Result<()> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ReelportError::NotFound(format!("entry {id}")))?;

        if let Some(ref title) = patch.title {
            entry.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            entry.description = description.clone();
        }
        if let Some(ref poster_url) = patch.poster_url {
            entry.poster_url = Some(poster_url.clone());
        }
        if let Some(ref video_url) = patch.video_url {
            entry.video_url = video_url.clone();
        }
        if let Some(ref trailer_url) = patch.trailer_url {
            entry.trailer_url = Some(trailer_url.clone());
        }
        if let Some(ref download_url) = patch.download_url {
            entry.download_url = Some(download_url.clone());
        }
        if let Some(ref genre) = patch.genre {
            entry.genre = genre.clone();
        }
        if let Some(category) = patch.category {
            entry.category = category;
        }
        if let Some(rating) = patch.rating {
            entry.rating = Some(rating);
        }
        if let Some(release_year) = patch.release_year {
            entry.release_year = Some(release_year);
        }
        if let Some(ref duration) = patch.duration {
            entry.duration = Some(duration.clone());
        }
        if let Some(ref language) = patch.language {
            entry.language = Some(language.clone());
        }
        if let Some(ref tags) = patch.tags {
            entry.tags = Some(tags.clone());
        }
        if let Some(is_featured) = patch.is_featured {
            entry.is_featured = is_featured;
        }
        entry.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(ReelportError::NotFound(format!("entry {id}")));
        }
        Ok(())
    }
}

/// In-memory site-config store
#[derive(Default)]
pub struct MemoryConfigRepository {
    hero: RwLock<Option<HeroOverride>>,
    branding: RwLock<Option<SiteBranding>>,
}

impl MemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hero_override(record: HeroOverride) -> Self {
        Self {
            hero: RwLock::new(Some(record)),
            branding: RwLock::new(None),
        }
    }
}

impl ConfigRepository for MemoryConfigRepository {
    async fn hero_override(&self) -> Result<Option<HeroOverride>> {
        Ok(self.hero.read().await.clone())
    }

    async fn branding(&self) -> Result<SiteBranding> {
        Ok(self.branding.read().await.clone().unwrap_or_default())
    }

    async fn set_hero_override(&self, record: &HeroOverride) -> Result<()> {
        *self.hero.write().await = Some(record.clone());
        Ok(())
    }

    async fn set_branding(&self, record: &SiteBranding) -> Result<()> {
        *self.branding.write().await = Some(record.clone());
        Ok(())
    }
}
