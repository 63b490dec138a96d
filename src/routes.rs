//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health probe, the Leptos SSR routes for the landing app, and
//! the compiled `/pkg` assets (WASM, JS, CSS) under a single Axum router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use landing::app::{App, shell};

/// Routes that do not depend on the Leptos site options.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site: health probe + SSR pages + static bundle.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref())
        .join(leptos_options.site_pkg_dir.as_ref());
    tracing::debug!(routes = routes.len(), pkg_dir = %pkg_dir.display(), "assembling router");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
