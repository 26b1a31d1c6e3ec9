//! Luach-Live Server
//!
//! Axum backend with the dashboard REST API and SPA serving.
//! Static files are embedded in the binary via rust-embed.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use http::{Method, header};
use rust_embed::Embed;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::service::{FileStore, MemStore, Storage, seed};

mod error;
mod handler;
mod service;

/// Embedded static files from dist/ directory
#[derive(Embed)]
#[folder = "../../dist/"]
struct Assets;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // LUACH_DATA_FILE opts into the file-backed store; default is in-memory
    let storage: Arc<dyn Storage> = match std::env::var("LUACH_DATA_FILE") {
        Ok(path) => {
            tracing::info!("Using file-backed store at {path}");
            Arc::new(FileStore::open(path)?)
        }
        Err(_) => Arc::new(MemStore::default()),
    };
    seed::seed_if_empty(storage.as_ref())?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = handler::router(AppState { storage })
        .fallback(serve_embedded)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Server listening on {addr}");
    tracing::info!("  - REST API: http://{addr}/api/dashboard-items");
    tracing::info!("  - SPA (embedded): http://{addr}/");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Serve embedded static files with SPA fallback
async fn serve_embedded(uri: axum::http::Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match asset_response(path) {
        Some(response) => response,
        // SPA fallback: serve index.html for client-side routing
        None => asset_response("index.html")
            .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response()),
    }
}

fn asset_response(path: &str) -> Option<Response> {
    let content = Assets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response(),
    )
}
