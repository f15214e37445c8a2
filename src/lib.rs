//! This crate serves a small news site: CRUD (create, read, delete)
//! for news articles via a restful API, plus the static browser bundle.
//! *There is no authentication*, put a gateway in front if you need it.
//!
//! ## API:
//! * `GET /api/news` - all news, newest first
//! * `GET /api/news/:id` - one article or 404
//! * `POST /api/news` - `{title, category, author, image?, summary, content}`, 201 `{message, id}`
//! * `DELETE /api/news/:id` - 200 `{message}` or 404
//!
//! Everything outside `/api` is served from the static directory.

use std::path::Path;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod handlers;
pub mod models;
pub mod store;

use handlers::api_router;
use store::ArticleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ArticleStore,
}

/// Builds the application router: the api under `/api`, static files
/// from `static_dir` for everything else.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
