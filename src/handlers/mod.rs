use crate::AppState;
use axum::routing::{get, Router};

mod errors;
mod handler;
mod model;
mod response;
mod util;

/// Routes mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    use handler::*;
    Router::<AppState>::new()
        .route("/news", get(read_news_list).post(create_news))
        .route("/news/:id", get(read_news).delete(delete_news))
}
