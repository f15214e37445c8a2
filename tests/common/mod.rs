#![allow(dead_code)]

use tempfile::TempDir;
use uc_news::models::NewArticle;
use uc_news::store::ArticleStore;

/// Fresh SQLite store in a temp dir. Keep the `TempDir` alive for the test.
pub async fn open_store() -> (TempDir, ArticleStore) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("news.db").display());
    let store = ArticleStore::connect(&url, 2).await.unwrap();
    (dir, store)
}

pub fn new_article(title: &str) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        category: "Tech".to_string(),
        author: "X".to_string(),
        date: "2024-03-01".to_string(),
        image: None,
        summary: "s".to_string(),
        content: "c".to_string(),
    }
}

pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
