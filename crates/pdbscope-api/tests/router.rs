//! Router tests over an in-memory structure source.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use pdbscope_api::middleware::REQUEST_ID_HEADER;
use pdbscope_api::{HealthResponse, Server};
use pdbscope_core::{Canned, FixtureSource, PdbScopeConfig};
use serde_json::{Value, json};
use tower::ServiceExt;

const PDB_TEXT: &str = "ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N\nEND\n";

fn fixtures() -> Arc<FixtureSource> {
    Arc::new(
        FixtureSource::new()
            .with(
                "1ubq",
                Canned::Ok(json!({
                    "struct": { "title": "UBIQUITIN" },
                    "rcsb_entry_info": {
                        "molecular_weight": 8.56,
                        "polymer_entity_count_protein": 1,
                        "resolution_combined": [1.8]
                    },
                    "exptl": [ { "method": "X-RAY DIFFRACTION" } ]
                })),
                Canned::Ok(json!({
                    "rcsb_entity_source_organism": [ { "organism_scientific_name": "Homo sapiens" } ]
                })),
                Canned::Ok(PDB_TEXT.to_string()),
            )
            .with(
                "9xyz",
                Canned::Ok(json!({ "struct": { "title": "METADATA ONLY" } })),
                Canned::Status(404),
                Canned::Unreachable("connection reset".to_string()),
            ),
    )
}

fn app(source: Arc<FixtureSource>) -> Router {
    Server::new(PdbScopeConfig::default(), source).router()
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn first_visit_uses_default_identifier() {
    let source = fixtures();
    let (status, html) = get(app(source.clone()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"1ubq\""));
    assert!(html.contains("8.56 Da"));
    assert!(html.contains("1.8 Å"));
    assert!(html.contains("X-RAY DIFFRACTION"));
    assert!(html.contains("pdbscope-viewer"));
    assert!(!html.contains("role=\"alert\""));
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn cleared_identifier_shows_prompt_without_requests() {
    let source = fixtures();
    let (status, html) = get(app(source.clone()), "/?pdb_id=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please enter a valid PDB ID"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn page_reports_failures_inline() {
    let (status, html) = get(app(fixtures()), "/?pdb_id=%209xyz%20").await;

    assert_eq!(status, StatusCode::OK);
    // Summary renders with placeholders; the scene failure gets its own banner.
    assert!(html.contains("Protein details"));
    assert!(html.contains("not available"));
    assert!(html.contains("Error loading the 3D visualization: Upstream error: connection reset"));
    assert!(!html.contains("pdbscope-viewer"));
}

#[tokio::test]
async fn summary_endpoint() {
    let (status, body) = get_json(app(fixtures()), "/api/v1/summary/1ubq").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "UBIQUITIN");
    assert_eq!(body["resolution"], "1.8 Å");
    assert_eq!(body["organism"], "Homo sapiens");

    let (status, body) = get_json(app(fixtures()), "/api/v1/summary/0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["category"], "not_found");

    let (status, body) = get_json(app(fixtures()), "/api/v1/summary/%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["category"], "validation");
}

#[tokio::test]
async fn scene_endpoint() {
    let (status, body) = get_json(app(fixtures()), "/api/v1/scene/1ubq").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"]["data"], PDB_TEXT);
    assert_eq!(body["model"]["format"], "pdb");
    assert_eq!(body["style"]["cartoon"]["color"], "spectrum");
    assert_eq!(body["viewport"]["width"], 800);
    assert_eq!(body["annotations"]["lines"].as_array().unwrap().len(), 21);
    assert_eq!(body["annotations"]["labels"].as_array().unwrap().len(), 5);

    let (status, body) = get_json(app(fixtures()), "/api/v1/scene/0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["category"], "not_found");

    let (status, body) = get_json(app(fixtures()), "/api/v1/scene/9xyz").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["category"], "upstream");
}

#[tokio::test]
async fn health_endpoint() {
    let (status, body) = get(app(fixtures()), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.server_name, "pdbscope");
}

#[tokio::test]
async fn request_id_is_echoed_or_generated() {
    let response = app(fixtures())
        .oneshot(
            Request::get("/health")
                .header(REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");

    let response = app(fixtures())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}
