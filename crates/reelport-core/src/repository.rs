//! Catalog and site-config repositories
//!
//! The backing store is the external managed backend; the core only sees
//! the abstract operations below. Ordering (creation timestamp descending)
//! and featured-entry tie-breaking (most-recently-created wins) are owned
//! by the store's queries, not re-derived here.

use serde::Deserialize;

use crate::client::BackendClient;
use crate::error::{ReelportError, Result};
use crate::types::{
    CatalogEntry, CatalogEntryPatch, Category, HeroOverride, NewCatalogEntry, SiteBranding,
};

/// Query interface over catalog entries
///
/// All listing operations return entries most-recent-first.
pub trait CatalogRepository {
    fn list_all(&self) -> impl Future<Output = Result<Vec<CatalogEntry>>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = Result<Option<CatalogEntry>>> + Send;
    fn list_by_category(
        &self,
        category: Category,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<CatalogEntry>>> + Send;
    /// The featured entry, most-recently-created winning when several are
    /// flagged
    fn get_featured(&self) -> impl Future<Output = Result<Option<CatalogEntry>>> + Send;
    fn list_related(
        &self,
        category: Category,
        exclude_id: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<CatalogEntry>>> + Send;
    /// Returns the id assigned by the store
    fn create(&self, entry: &NewCatalogEntry) -> impl Future<Output = Result<String>> + Send;
    fn update(
        &self,
        id: &str,
        patch: &CatalogEntryPatch,
    ) -> impl Future<Output = Result<()>> + Send;
    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Read/write access to the singleton site-config records
pub trait ConfigRepository {
    fn hero_override(&self) -> impl Future<Output = Result<Option<HeroOverride>>> + Send;
    fn branding(&self) -> impl Future<Output = Result<SiteBranding>> + Send;
    fn set_hero_override(
        &self,
        record: &HeroOverride,
    ) -> impl Future<Output = Result<()>> + Send;
    fn set_branding(&self, record: &SiteBranding) -> impl Future<Output = Result<()>> + Send;
}

/// Response shape of the backend's create endpoint
#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

/// Catalog repository over the backend's REST facade
pub struct RestCatalogRepository {
    client: BackendClient,
}

impl RestCatalogRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl CatalogRepository for RestCatalogRepository {
    async fn list_all(&self) -> Result<Vec<CatalogEntry>> {
        self.client.get_json("/catalog").await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CatalogEntry>> {
        let path = format!("/catalog/{}", urlencoding::encode(id));
        match self.client.get_json(&path).await {
            Ok(entry) => Ok(Some(entry)),
            Err(ReelportError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_by_category(&self, category: Category, limit: usize) -> Result<Vec<CatalogEntry>> {
        let path = format!("/catalog?category={category}&limit={limit}");
        self.client.get_json(&path).await
    }

    async fn get_featured(&self) -> Result<Option<CatalogEntry>> {
        let entries: Vec<CatalogEntry> =
            self.client.get_json("/catalog?featured=true&limit=1").await?;
        Ok(entries.into_iter().next())
    }

    async fn list_related(
        &self,
        category: Category,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>> {
        let path = format!(
            "/catalog?category={}&exclude={}&limit={}",
            category,
            urlencoding::encode(exclude_id),
            limit
        );
        self.client.get_json(&path).await
    }

    async fn create(&self, entry: &NewCatalogEntry) -> Result<String> {
        let created: CreatedDocument = self.client.post_json("/catalog", entry).await?;
        Ok(created.id)
    }

    async fn update(&self, id: &str, patch: &CatalogEntryPatch) -> Result<()> {
        let path = format!("/catalog/{}", urlencoding::encode(id));
        self.client.patch_json(&path, patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/catalog/{}", urlencoding::encode(id));
        self.client.delete(&path).await
    }
}

/// Site-config repository over the backend's REST facade
///
/// A missing hero-override document reads as `None`; a missing branding
/// document reads as the default branding, since both are optional
/// singletons the administrator may never have saved.
pub struct RestConfigRepository {
    client: BackendClient,
}

impl RestConfigRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl ConfigRepository for RestConfigRepository {
    async fn hero_override(&self) -> Result<Option<HeroOverride>> {
        match self.client.get_json("/config/hero").await {
            Ok(record) => Ok(Some(record)),
            Err(ReelportError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn branding(&self) -> Result<SiteBranding> {
        match self.client.get_json("/config/branding").await {
            Ok(record) => Ok(record),
            Err(ReelportError::NotFound(_)) => Ok(SiteBranding::default()),
            Err(e) => Err(e),
        }
    }

    async fn set_hero_override(&self, record: &HeroOverride) -> Result<()> {
        self.client.put_json("/config/hero", record).await
    }

    async fn set_branding(&self, record: &SiteBranding) -> Result<()> {
        self.client.put_json("/config/branding", record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry_json(id: &str, category: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Entry {id}"),
            "videoUrl": "https://youtu.be/dQw4w9WgXcQ",
            "genre": "Action",
            "category": category,
            "createdAt": "2024-06-01T00:00:00Z",
            "updatedAt": "2024-06-01T00:00:00Z"
        })
    }

    async fn catalog_repo(server: &MockServer) -> RestCatalogRepository {
        let config = ClientConfig {
            base_url: server.uri(),
            requests_per_second: 1000.0,
            timeout_secs: 5,
            max_retries: 0,
        };
        RestCatalogRepository::new(BackendClient::with_config(config).unwrap())
    }

    async fn config_repo(server: &MockServer) -> RestConfigRepository {
        let config = ClientConfig {
            base_url: server.uri(),
            requests_per_second: 1000.0,
            timeout_secs: 5,
            max_retries: 0,
        };
        RestConfigRepository::new(BackendClient::with_config(config).unwrap())
    }

    #[tokio::test]
    async fn test_list_all_decodes_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([entry_json("a", "movies"), entry_json("b", "latest")])),
            )
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let entries = repo.list_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[1].category, Category::Latest);
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry_json("a", "movies")))
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let entry = repo.get_by_id("a").await.unwrap();
        assert_eq!(entry.unwrap().id, "a");
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        assert!(repo.get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_backend_failure_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog/a"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        assert!(matches!(
            repo.get_by_id("a").await,
            Err(ReelportError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_list_by_category_builds_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .and(query_param("category", "webseries"))
            .and(query_param("limit", "12"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([entry_json("w", "webseries")])),
            )
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let entries = repo.list_by_category(Category::Webseries, 12).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_get_featured_takes_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .and(query_param("featured", "true"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([entry_json("f", "movies")])),
            )
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let featured = repo.get_featured().await.unwrap();
        assert_eq!(featured.unwrap().id, "f");
    }

    #[tokio::test]
    async fn test_get_featured_empty_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        assert!(repo.get_featured().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_related_excludes_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .and(query_param("category", "movies"))
            .and(query_param("exclude", "keep-out"))
            .and(query_param("limit", "10"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([entry_json("r", "movies")])),
            )
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let related = repo
            .list_related(Category::Movies, "keep-out", 10)
            .await
            .unwrap();
        assert_eq!(related[0].id, "r");
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "new1"})))
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let entry = NewCatalogEntry {
            title: "T".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            category: Some(Category::Movies),
            ..Default::default()
        };
        assert_eq!(repo.create(&entry).await.unwrap(), "new1");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/catalog/a"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/catalog/a"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let repo = catalog_repo(&server).await;
        let patch = CatalogEntryPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        repo.update("a", &patch).await.unwrap();
        repo.delete("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_hero_override_missing_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config/hero"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = config_repo(&server).await;
        assert!(repo.hero_override().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_branding_missing_falls_back_to_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config/branding"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = config_repo(&server).await;
        assert_eq!(repo.branding().await.unwrap(), SiteBranding::default());
    }

    #[tokio::test]
    async fn test_set_hero_override_puts_record() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/config/hero"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let repo = config_repo(&server).await;
        let record = HeroOverride {
            youtube_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            manual_override: true,
            ..Default::default()
        };
        repo.set_hero_override(&record).await.unwrap();
    }
}
