//! Reelport route layer
//!
//! Thin axum server exposing the portal's operations as JSON routes. All
//! persistence lives in the external managed backend; this binary only
//! wires the core pipeline to HTTP.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";
const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Server configuration, read from environment variables
#[derive(Debug, Clone)]
struct ServerConfig {
    backend_url: String,
    bind: SocketAddr,
    admin_token: String,
}

impl ServerConfig {
    fn from_env() -> Result<Self, String> {
        let backend_url =
            std::env::var("REELPORT_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.into());
        let bind_raw = std::env::var("REELPORT_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| format!("invalid REELPORT_BIND {bind_raw:?}: {e}"))?;
        // Unset means the admin surface stays closed
        let admin_token = std::env::var("REELPORT_ADMIN_TOKEN").unwrap_or_default();

        Ok(Self {
            backend_url,
            bind,
            admin_token,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;
    if config.admin_token.is_empty() {
        tracing::warn!("REELPORT_ADMIN_TOKEN unset; admin routes will reject every request");
    }

    let state = AppState::new(&config.backend_url, &config.admin_token)?;
    let app = routes::router(state);

    tracing::info!(bind = %config.bind, backend = %config.backend_url, "reelport listening");
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_parses() {
        assert!(DEFAULT_BIND.parse::<SocketAddr>().is_ok());
    }
}
