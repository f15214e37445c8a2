use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `news` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub author: String,
    /// `YYYY-MM-DD`, set when the article is created
    pub date: String,
    pub image: Option<String>,
    pub summary: String,
    pub content: String,
}

/// Article without an id, ready to be inserted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub image: Option<String>,
    pub summary: String,
    pub content: String,
}
