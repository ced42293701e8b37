//! JSON route handlers over the portal
//!
//! Every handler converts portal failures into one of the user-recoverable
//! HTTP states; nothing bubbles into a generic 500 page. Admin routes pass
//! the request's bearer token to the access policy as the subject.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use reelport_core::{
    CatalogEntry, CatalogEntryPatch, Category, DownloadPage, HeroOverride, HeroView, HomePage,
    NewCatalogEntry, ReelportError, SiteBranding, WatchPage,
};

use crate::state::AppState;

/// Error wrapper mapping the core taxonomy onto HTTP statuses
#[derive(Debug)]
pub struct ApiError(ReelportError);

impl From<ReelportError> for ApiError {
    fn from(err: ReelportError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "request failed against backend");
        }
        (status, Json(serde_json::json!({ "error": self.0 }))).into_response()
    }
}

/// HTTP status for each error variant
pub fn status_for(err: &ReelportError) -> StatusCode {
    match err {
        ReelportError::NotFound(_) => StatusCode::NOT_FOUND,
        ReelportError::Validation(_) => StatusCode::BAD_REQUEST,
        ReelportError::Forbidden(_) => StatusCode::FORBIDDEN,
        ReelportError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ReelportError::Backend(_) | ReelportError::Decode(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Bearer token from the Authorization header, empty when absent
///
/// The policy treats the token as the subject; an empty subject never
/// authorizes anything.
fn bearer_subject(headers: &HeaderMap) -> String {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Free-text search query; takes precedence over type filtering
    q: Option<String>,
    /// Category name for content-type browsing
    #[serde(rename = "type")]
    content_type: Option<String>,
    count: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/catalog", get(list_catalog))
        .route("/api/watch/{id}", get(watch))
        .route("/api/download/{id}", get(download))
        .route("/api/hero", get(hero))
        .route("/api/branding", get(branding))
        .route("/api/admin/catalog", post(create_entry))
        .route("/api/admin/catalog/{id}", patch(update_entry))
        .route("/api/admin/catalog/{id}", delete(delete_entry))
        .route("/api/admin/hero", put(set_hero))
        .route("/api/admin/branding", put(set_branding))
        .with_state(state)
}

pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, ApiError> {
    Ok(Json(state.portal.home().await?))
}

pub async fn list_catalog(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    if let Some(ref query) = params.q {
        return Ok(Json(state.portal.search(query).await?));
    }

    let content_type = match params.content_type.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(raw.parse::<Category>()?),
    };
    Ok(Json(state.portal.browse(content_type, params.count).await?))
}

pub async fn watch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WatchPage>, ApiError> {
    Ok(Json(state.portal.watch(&id).await?))
}

pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DownloadPage>, ApiError> {
    Ok(Json(state.portal.download(&id).await?))
}

pub async fn hero(State(state): State<AppState>) -> Result<Json<HeroView>, ApiError> {
    Ok(Json(state.portal.hero().await?))
}

pub async fn branding(State(state): State<AppState>) -> Result<Json<SiteBranding>, ApiError> {
    Ok(Json(state.portal.branding().await?))
}

pub async fn create_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(entry): Json<NewCatalogEntry>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let subject = bearer_subject(&headers);
    let id = state.portal.create_entry(&subject, &entry).await?;
    Ok(Json(serde_json::json!({ "id": id })))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<CatalogEntryPatch>,
) -> Result<StatusCode, ApiError> {
    let subject = bearer_subject(&headers);
    state.portal.update_entry(&subject, &id, &patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let subject = bearer_subject(&headers);
    state.portal.delete_entry(&subject, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_hero(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(record): Json<HeroOverride>,
) -> Result<StatusCode, ApiError> {
    let subject = bearer_subject(&headers);
    state.portal.set_hero_override(&subject, &record).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_branding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(record): Json<SiteBranding>,
) -> Result<StatusCode, ApiError> {
    let subject = bearer_subject(&headers);
    state.portal.set_branding(&subject, &record).await?;
    Ok(StatusCode::NO_CONTENT)
}
