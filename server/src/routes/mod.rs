//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON API, the Leptos SSR pages, and the static site assets
//! under a single Axum router. Pages (`/`, `/hello/{name}`, `/form`,
//! `/result`) are Leptos routes; `POST /form` shares its path with the form
//! page and takes no-script submissions. `/images` comes from the site
//! directory and `/pkg` (WASM, JS glue, compiled stylesheet) from the Leptos
//! build output.

pub mod form;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// JSON API and health routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/form", post(form::submit))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Form posts from pages rendered without WASM.
fn page_form_routes(state: AppState) -> Router {
    Router::new()
        .route(form::FORM_PATH, post(form::submit_form))
        .with_state(state)
}

/// Static site assets that live outside the Leptos build.
fn site_routes(config: &ServerConfig) -> Router {
    Router::new().nest_service("/images", ServeDir::new(config.site_dir.join("images")))
}

/// Full application: API + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let state = AppState::new(config);

    Ok(api_routes(state.clone())
        .merge(page_form_routes(state))
        .merge(site_routes(config))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}
