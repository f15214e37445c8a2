use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("News not found")]
    NotFound,
    #[error("Invalid request: {0}")]
    Validation(String),
    /// `context` is what the client sees, the source only goes to the log.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl NewsError {
    /// For `map_err`: wraps a store failure with the message shown to clients.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        if let Self::Store { context, source } = &self {
            tracing::error!("{}: {}", context, source);
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
