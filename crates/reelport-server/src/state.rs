//! Shared application state and the admin token policy

use std::sync::Arc;

use reelport_core::{
    AccessPolicy, AdminAction, BackendClient, ClientConfig, Portal, RestCatalogRepository,
    RestConfigRepository, Result,
};

/// Stand-in for the external auth provider: a single shared admin token
///
/// The subject handed to the policy is the bearer token presented by the
/// request. An empty configured token denies everything, so an unset
/// `REELPORT_ADMIN_TOKEN` cannot accidentally open the admin surface.
#[derive(Debug, Clone)]
pub struct TokenPolicy {
    token: String,
}

impl TokenPolicy {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl AccessPolicy for TokenPolicy {
    fn is_authorized(&self, subject: &str, _action: AdminAction) -> bool {
        !self.token.is_empty() && subject == self.token
    }
}

/// Concrete portal type served by this binary
pub type PortalImpl = Portal<RestCatalogRepository, RestConfigRepository, TokenPolicy>;

/// Shared state for all route handlers
#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<PortalImpl>,
}

impl AppState {
    /// Build the portal against a backend base URL
    pub fn new(backend_url: &str, admin_token: &str) -> Result<Self> {
        let config = ClientConfig::for_base_url(backend_url);
        let catalog = RestCatalogRepository::new(BackendClient::with_config(config.clone())?);
        let site = RestConfigRepository::new(BackendClient::with_config(config)?);
        let portal = Portal::new(catalog, site, TokenPolicy::new(admin_token));
        Ok(Self {
            portal: Arc::new(portal),
        })
    }
}
