//! Routes and handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde::{Deserialize, Serialize};

use pdbscope_core::config::ViewerConfig;
use pdbscope_core::{
    Dashboard, PdbId, ProteinSummary, SceneDescription, SceneOutcome, StructureSource,
};

use crate::error::ApiError;
use crate::render;

/// Name reported by the health endpoint.
pub const SERVER_NAME: &str = "pdbscope";

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard<Arc<dyn StructureSource>>>,
    viewer: Arc<ViewerConfig>,
}

impl AppState {
    /// Wrap a source with the configured viewer settings and entity number.
    pub fn new(source: Arc<dyn StructureSource>, viewer: ViewerConfig, entity_id: u32) -> Self {
        let dashboard = Dashboard::new(source)
            .with_entity_id(entity_id)
            .with_viewport(viewer.viewport());
        Self {
            dashboard: Arc::new(dashboard),
            viewer: Arc::new(viewer),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/v1/summary/{pdb_id}", get(summary))
        .route("/api/v1/scene/{pdb_id}", get(scene))
        .route("/health", get(health))
        .layer(middleware::from_fn(crate::middleware::request_tracing))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    pdb_id: Option<String>,
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    // No parameter at all is a first visit; an empty one is a cleared field.
    let input = query
        .pdb_id
        .unwrap_or_else(|| state.viewer.default_pdb_id.clone());
    let view = state.dashboard.render(&input).await;
    Html(render::dashboard_page(&view, &input, &state.viewer))
}

async fn summary(
    State(state): State<AppState>,
    Path(pdb_id): Path<String>,
) -> Result<Json<ProteinSummary>, ApiError> {
    let id = parse_id(&pdb_id)?;
    Ok(Json(state.dashboard.lookup_summary(&id).await?))
}

async fn scene(
    State(state): State<AppState>,
    Path(pdb_id): Path<String>,
) -> Result<Json<SceneDescription>, ApiError> {
    let id = parse_id(&pdb_id)?;
    match state.dashboard.scene_outcome(&id).await {
        SceneOutcome::Ready(scene) => Ok(Json(scene)),
        SceneOutcome::Unavailable { status } => Err(ApiError::new(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("No structure file available for {id} (HTTP {status})"),
        )),
        SceneOutcome::Failed(e) => Err(e.into()),
    }
}

fn parse_id(raw: &str) -> Result<PdbId, ApiError> {
    PdbId::parse(raw).ok_or_else(|| pdbscope_core::Error::EmptyIdentifier.into())
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        server_name: SERVER_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
