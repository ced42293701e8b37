//! High-level portal API
//!
//! Combines the repositories, the catalog filter, the URL resolver and the
//! hero selection into the page-shaped operations the view layer consumes.
//! Every repository-facing call is wrapped so failures surface as one of
//! the error taxonomy's user-recoverable states; nothing here panics.

use serde::Serialize;

use crate::error::{ReelportError, Result};
use crate::filter::{self, CategoryBuckets};
use crate::gate::DEFAULT_GATE_DELAY_SECS;
use crate::hero::{HeroContent, select_hero};
use crate::policy::{AccessPolicy, AdminAction};
use crate::repository::{CatalogRepository, ConfigRepository};
use crate::resolver::convert_to_embeddable;
use crate::types::{
    CatalogEntry, CatalogEntryPatch, Category, DownloadLink, HeroOverride, NewCatalogEntry,
    SiteBranding,
};

/// Number of related entries shown under the watch player
const RELATED_LIMIT: usize = 10;

/// Home-page payload
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub buckets: CategoryBuckets,
}

/// Watch-page payload: the entry, its resolved embed URL and related rows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchPage {
    pub entry: CatalogEntry,
    /// `entry.video_url` run through the provider resolver; identical to
    /// the stored URL when no provider matched, in which case the view
    /// renders its invalid-source state
    pub embed_url: String,
    pub related: Vec<CatalogEntry>,
}

/// Download-page payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPage {
    pub entry: CatalogEntry,
    /// Empty when the entry has no download URL
    pub links: Vec<DownloadLink>,
    /// Countdown the gate enforces before revealing each link
    pub gate_delay_secs: u32,
}

/// Resolved hero payload
///
/// `video_id` is `None` either because the hero is empty or because the
/// selected source is not a well-formed YouTube URL; the `content` variant
/// disambiguates the two so the view can show "invalid trailer" rather
/// than "nothing configured".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub content: HeroContent,
    pub video_id: Option<String>,
}

/// The portal facade over a catalog repository, a config repository and an
/// access policy
pub struct Portal<R, C, P> {
    catalog: R,
    config: C,
    policy: P,
}

impl<R, C, P> Portal<R, C, P>
where
    R: CatalogRepository,
    C: ConfigRepository,
    P: AccessPolicy,
{
    pub fn new(catalog: R, config: C, policy: P) -> Self {
        Self {
            catalog,
            config,
            policy,
        }
    }

    /// Home page: one catalog snapshot bucketed into the named grids
    pub async fn home(&self) -> Result<HomePage> {
        let entries = self.catalog.list_all().await?;
        Ok(HomePage {
            buckets: filter::bucket_by_category(&entries),
        })
    }

    /// Free-text search over title and genre
    ///
    /// An empty query returns the full catalog in store order.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let entries = self.catalog.list_all().await?;
        Ok(filter::filter_by_search(&entries, query))
    }

    /// Content-type listing: most-recent `count` entries, optionally
    /// restricted to one category
    pub async fn browse(
        &self,
        content_type: Option<Category>,
        count: Option<usize>,
    ) -> Result<Vec<CatalogEntry>> {
        let entries = self.catalog.list_all().await?;
        Ok(filter::by_content_type(&entries, content_type, count))
    }

    /// Watch page for one entry
    ///
    /// # Errors
    /// `NotFound` when the id has no record; the route layer renders the
    /// not-found state with a navigation-home affordance.
    pub async fn watch(&self, id: &str) -> Result<WatchPage> {
        let entry = self
            .catalog
            .get_by_id(id)
            .await?
            .ok_or_else(|| ReelportError::NotFound(format!("entry {id}")))?;

        let related = self
            .catalog
            .list_related(entry.category, &entry.id, RELATED_LIMIT)
            .await?;
        let embed_url = convert_to_embeddable(&entry.video_url);

        Ok(WatchPage {
            entry,
            embed_url,
            related,
        })
    }

    /// Download page for one entry
    pub async fn download(&self, id: &str) -> Result<DownloadPage> {
        let entry = self
            .catalog
            .get_by_id(id)
            .await?
            .ok_or_else(|| ReelportError::NotFound(format!("entry {id}")))?;

        let links = DownloadLink::tiers_for(&entry);
        Ok(DownloadPage {
            entry,
            links,
            gate_delay_secs: DEFAULT_GATE_DELAY_SECS,
        })
    }

    /// Hero banner selection
    ///
    /// A fetch failure is an error, kept distinct from the empty hero so
    /// the view can tell "backend failure" from "nothing configured".
    pub async fn hero(&self) -> Result<HeroView> {
        let override_record = self.config.hero_override().await?;
        let featured = self.catalog.get_featured().await?;

        let content = select_hero(override_record.as_ref(), featured.as_ref());
        let video_id = content.video_id();
        Ok(HeroView { content, video_id })
    }

    /// Current site branding singleton
    pub async fn branding(&self) -> Result<SiteBranding> {
        self.config.branding().await
    }

    fn authorize(&self, subject: &str, action: AdminAction) -> Result<()> {
        if self.policy.is_authorized(subject, action) {
            Ok(())
        } else {
            Err(ReelportError::Forbidden(format!(
                "{subject} may not {action}"
            )))
        }
    }

    /// Create a catalog entry; policy and validation run before any
    /// repository call
    pub async fn create_entry(&self, subject: &str, entry: &NewCatalogEntry) -> Result<String> {
        self.authorize(subject, AdminAction::CreateEntry)?;
        entry.validate()?;
        let id = self.catalog.create(entry).await?;
        tracing::info!(subject, %id, "catalog entry created");
        Ok(id)
    }

    /// Patch a catalog entry
    pub async fn update_entry(
        &self,
        subject: &str,
        id: &str,
        patch: &CatalogEntryPatch,
    ) -> Result<()> {
        self.authorize(subject, AdminAction::UpdateEntry)?;
        patch.validate()?;
        self.catalog.update(id, patch).await?;
        tracing::info!(subject, id, "catalog entry updated");
        Ok(())
    }

    /// Delete a catalog entry
    pub async fn delete_entry(&self, subject: &str, id: &str) -> Result<()> {
        self.authorize(subject, AdminAction::DeleteEntry)?;
        self.catalog.delete(id).await?;
        tracing::info!(subject, id, "catalog entry deleted");
        Ok(())
    }

    /// Replace the hero override singleton
    pub async fn set_hero_override(&self, subject: &str, record: &HeroOverride) -> Result<()> {
        self.authorize(subject, AdminAction::EditHero)?;
        self.config.set_hero_override(record).await
    }

    /// Replace the site branding singleton
    pub async fn set_branding(&self, subject: &str, record: &SiteBranding) -> Result<()> {
        self.authorize(subject, AdminAction::EditBranding)?;
        self.config.set_branding(record).await
    }
}
