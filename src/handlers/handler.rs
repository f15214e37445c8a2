use crate::models::Article;
use crate::AppState;

use super::errors::*;
use super::model::*;
use super::response::*;
use super::util::today;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

/// `GET /api/news`, newest first
pub async fn read_news_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, NewsError> {
    let news = state
        .store
        .list_all()
        .await
        .map_err(NewsError::store("Error fetching news"))?;

    tracing::info!("Read {} news", news.len());
    Ok(Json(news))
}

/// `GET /api/news/:id`
pub async fn read_news(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Article>, NewsError> {
    let id = news_id(id)?;
    tracing::info!("Reading news. id: {}", id);

    state
        .store
        .get_by_id(id)
        .await
        .map_err(NewsError::store("Error fetching news by ID"))?
        .map(Json)
        .ok_or(NewsError::NotFound)
}

/// `POST /api/news`
/// Request: Json {title, category, author, image?, summary, content}
/// Response: 201, Json {message, id}
/// The date is always today's, whatever the client sends.
pub async fn create_news(
    State(state): State<AppState>,
    body: Result<Json<CreateNewsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateNewsResponse>), NewsError> {
    let Json(request) = body.map_err(|e| NewsError::Validation(e.body_text()))?;
    let article = request.into_new_article(today())?;
    tracing::info!("Creating news with title: {}", &article.title);

    let id = state
        .store
        .insert(&article)
        .await
        .map_err(NewsError::store("Error adding news"))?;

    tracing::info!("Created news. id: {}", id);
    Ok((
        StatusCode::CREATED,
        Json(CreateNewsResponse {
            message: "News added successfully".into(),
            id,
        }),
    ))
}

/// `DELETE /api/news/:id`
pub async fn delete_news(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteNewsResponse>, NewsError> {
    let id = news_id(id)?;
    tracing::info!("Delete news. id: {}", id);

    let deleted = state
        .store
        .delete_by_id(id)
        .await
        .map_err(NewsError::store("Error deleting news"))?;

    if !deleted {
        return Err(NewsError::NotFound);
    }
    Ok(Json(DeleteNewsResponse {
        message: "News deleted successfully".into(),
    }))
}

fn news_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, NewsError> {
    id.map(|Path(id)| id)
        .map_err(|e| NewsError::Validation(e.body_text()))
}
