//! Reelport Core Library
//!
//! The catalog-rendering and video-source-resolution pipeline behind the
//! reelport streaming portal: it takes heterogeneous, externally-authored
//! catalog records from a managed backend and deterministically produces a
//! playable/downloadable experience.
//!
//! # Overview
//!
//! This crate provides:
//! - A provider URL resolver (YouTube, Google Drive, Vimeo, Dailymotion,
//!   direct files) with an explicit, ordered dispatch table
//! - Pure catalog filtering and category bucketing for the listing pages
//! - Hero banner selection with an override → trailer → primary → empty
//!   fallback chain
//! - A countdown-gated download reveal, independent per quality tier
//! - Rate-limited repositories over the managed backend's JSON REST facade
//! - A high-level [`Portal`] API stitching the above into page payloads
//!
//! # Example
//!
//! ```no_run
//! use reelport_core::{
//!     AllowAll, BackendClient, ClientConfig, Portal, RestCatalogRepository,
//!     RestConfigRepository, Result,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::for_base_url("https://backend.example");
//!     let catalog = RestCatalogRepository::new(BackendClient::with_config(config.clone())?);
//!     let site = RestConfigRepository::new(BackendClient::with_config(config)?);
//!     let portal = Portal::new(catalog, site, AllowAll);
//!
//!     let home = portal.home().await?;
//!     for entry in &home.buckets.trending {
//!         println!("{}: {}", entry.title, entry.video_url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Resolution by identity
//!
//! URL resolution never throws: a URL the resolver cannot make sense of is
//! returned unchanged (or `None` for id extraction), so views render an
//! inline invalid-source state instead of crashing.

mod client;
mod error;
pub mod filter;
pub mod gate;
pub mod hero;
mod memory;
mod policy;
mod portal;
mod repository;
pub mod resolver;
mod types;

// Re-export client types
pub use client::{BackendClient, ClientConfig, RateLimiter};

// Re-export error types
pub use error::{ReelportError, Result};

// Re-export filter types
pub use filter::{CategoryBuckets, bucket_by_category, by_content_type, filter_by_search};

// Re-export gate types
pub use gate::{DEFAULT_GATE_DELAY_SECS, DownloadGate, TierState, run_countdown};

// Re-export hero selection
pub use hero::{HeroContent, HeroSource, select_hero};

// Re-export policy seam
pub use policy::{AccessPolicy, AdminAction, AllowAll, DenyAll};

// Re-export the high-level portal API
pub use portal::{DownloadPage, HeroView, HomePage, Portal, WatchPage};

// Re-export repositories
pub use memory::{MemoryCatalogRepository, MemoryConfigRepository};
pub use repository::{
    CatalogRepository, ConfigRepository, RestCatalogRepository, RestConfigRepository,
};

// Re-export data types
pub use types::{
    CatalogEntry, CatalogEntryPatch, Category, DownloadLink, HeroOverride, NewCatalogEntry,
    OverlayCorner, Quality, SiteBranding, SplashConfig, SplashMode,
};
