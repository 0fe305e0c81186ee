//! HTTP surface of the host: the shell page, the injected runtime config,
//! and the embedded static assets.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    routing::get,
    Json, Router,
};
use glframe_embed::{EmbedConfig, CONFIG_GLOBAL, CONFIG_URL_KEY};
use tower_http::cors::{Any, CorsLayer};

use crate::embedded;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// Shared state
#[derive(Clone)]
pub struct AppState {
    pub embed: EmbedConfig,
}

// Routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(serve_index))
        .route("/config.js", get(serve_config_js)) // Serve dynamic config
        .route("/health", get(health_check))
        .route("/*path", get(serve_static))
        .with_state(state)
        .layer(cors)
}

/// Serve index.html at root
async fn serve_index() -> Response<Body> {
    match embedded::index() {
        Some(asset) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, asset.content_type)
            .body(Body::from(asset.body))
            .unwrap(),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("index.html not found"))
            .unwrap(),
    }
}

/// Serve /config.js with the embed URL for the page.
///
/// The value is JSON-encoded so an arbitrary configured URL can never break
/// out of the script; an unconfigured URL is injected as `null`.
async fn serve_config_js(State(state): State<AppState>) -> Response<Body> {
    let url_json =
        serde_json::to_string(&state.embed.url).unwrap_or_else(|_| "null".to_string());
    let js = format!("window.{CONFIG_GLOBAL} = {{ \"{CONFIG_URL_KEY}\": {url_json} }};");
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/javascript")
        .body(Body::from(js))
        .unwrap()
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": VERSION }))
}

/// Serve embedded static file, falling back to the shell for unknown paths
async fn serve_static(Path(path): Path<String>) -> Response<Body> {
    match embedded::lookup(&path) {
        Some(asset) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, asset.content_type)
            .header(header::CACHE_CONTROL, "public, max-age=3600")
            .body(Body::from(asset.body))
            .unwrap(),
        None => match embedded::index() {
            Some(asset) => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, asset.content_type)
                .body(Body::from(asset.body))
                .unwrap(),
            None => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::from("Not Found"))
                .unwrap(),
        },
    }
}
