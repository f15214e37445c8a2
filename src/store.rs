//! Persistence of articles in the `news` table.
//!
//! Every operation is a single statement, so there is no transaction
//! handling here: concurrent writers rely on the engine's per-statement
//! atomicity.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::models::{Article, NewArticle};

const LIST_ALL: &str =
    "SELECT id, title, category, author, date, image, summary, content FROM news ORDER BY id DESC";
const GET_BY_ID: &str =
    "SELECT id, title, category, author, date, image, summary, content FROM news WHERE id = ?";
const INSERT: &str = "INSERT INTO news (title, category, author, date, image, summary, content) \
                      VALUES (?, ?, ?, ?, ?, ?, ?)";
const DELETE_BY_ID: &str = "DELETE FROM news WHERE id = ?";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database reported an out of range id for the inserted row: {0}")]
    InvalidInsertId(u64),
    #[error("unsupported database url scheme: {0}")]
    UnsupportedBackend(String),
}

/// SQL flavour of the connected database, picked from the url scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Result<Self, StoreError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(StoreError::UnsupportedBackend(other.to_string())),
        }
    }

    // Both variants keep ids from being reused after a delete.
    fn create_table_sql(self) -> &'static str {
        match self {
            Self::MySql => {
                "CREATE TABLE IF NOT EXISTS news (
                    id BIGINT AUTO_INCREMENT PRIMARY KEY,
                    title VARCHAR(255) NOT NULL,
                    category VARCHAR(100) NOT NULL,
                    author VARCHAR(100) NOT NULL,
                    date VARCHAR(50) NOT NULL,
                    image VARCHAR(500),
                    summary TEXT NOT NULL,
                    content LONGTEXT NOT NULL
                )"
            }
            Self::Sqlite => {
                "CREATE TABLE IF NOT EXISTS news (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    category TEXT NOT NULL,
                    author TEXT NOT NULL,
                    date TEXT NOT NULL,
                    image TEXT,
                    summary TEXT NOT NULL,
                    content TEXT NOT NULL
                )"
            }
        }
    }
}

/// Pool of the connected database. Each backend keeps its own row and
/// result types so ids and NULL columns decode natively.
#[derive(Clone, Debug)]
enum Backend {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

/// Shared handle to the article table. Cloning is cheap, all clones use
/// the same pool.
#[derive(Clone, Debug)]
pub struct ArticleStore {
    backend: Backend,
}

impl ArticleStore {
    /// Opens the pool and makes sure the `news` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let dialect = Dialect::from_url(database_url)?;
        let backend = match dialect {
            Dialect::MySql => Backend::MySql(
                MySqlPoolOptions::new()
                    .max_connections(max_connections)
                    .connect(database_url)
                    .await?,
            ),
            Dialect::Sqlite => Backend::Sqlite(
                SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .connect(database_url)
                    .await?,
            ),
        };
        tracing::debug!(?dialect, "Connected to the database");

        let store = Self { backend };
        store.initialize().await?;
        Ok(store)
    }

    pub fn dialect(&self) -> Dialect {
        match self.backend {
            Backend::MySql(_) => Dialect::MySql,
            Backend::Sqlite(_) => Dialect::Sqlite,
        }
    }

    /// Creates the `news` table if it is missing. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let sql = self.dialect().create_table_sql();
        match &self.backend {
            Backend::MySql(pool) => {
                sqlx::query(sql).execute(pool).await?;
            }
            Backend::Sqlite(pool) => {
                sqlx::query(sql).execute(pool).await?;
            }
        }
        tracing::info!("News table checked/created");
        Ok(())
    }

    /// All articles, newest id first.
    pub async fn list_all(&self) -> Result<Vec<Article>, StoreError> {
        let articles = match &self.backend {
            Backend::MySql(pool) => {
                sqlx::query_as::<_, Article>(LIST_ALL)
                    .fetch_all(pool)
                    .await?
            }
            Backend::Sqlite(pool) => {
                sqlx::query_as::<_, Article>(LIST_ALL)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(articles)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Article>, StoreError> {
        let article = match &self.backend {
            Backend::MySql(pool) => {
                sqlx::query_as::<_, Article>(GET_BY_ID)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
            Backend::Sqlite(pool) => {
                sqlx::query_as::<_, Article>(GET_BY_ID)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
        };
        Ok(article)
    }

    /// Inserts the row and returns the id the database assigned to it.
    pub async fn insert(&self, article: &NewArticle) -> Result<i64, StoreError> {
        match &self.backend {
            Backend::MySql(pool) => {
                let result = sqlx::query(INSERT)
                    .bind(article.title.as_str())
                    .bind(article.category.as_str())
                    .bind(article.author.as_str())
                    .bind(article.date.as_str())
                    .bind(article.image.as_deref())
                    .bind(article.summary.as_str())
                    .bind(article.content.as_str())
                    .execute(pool)
                    .await?;
                let id = result.last_insert_id();
                i64::try_from(id).map_err(|_| StoreError::InvalidInsertId(id))
            }
            Backend::Sqlite(pool) => {
                let result = sqlx::query(INSERT)
                    .bind(article.title.as_str())
                    .bind(article.category.as_str())
                    .bind(article.author.as_str())
                    .bind(article.date.as_str())
                    .bind(article.image.as_deref())
                    .bind(article.summary.as_str())
                    .bind(article.content.as_str())
                    .execute(pool)
                    .await?;
                Ok(result.last_insert_rowid())
            }
        }
    }

    /// Returns `false` when no row had this id.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let affected = match &self.backend {
            Backend::MySql(pool) => sqlx::query(DELETE_BY_ID)
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected(),
            Backend::Sqlite(pool) => sqlx::query(DELETE_BY_ID)
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected(),
        };
        Ok(affected > 0)
    }

    pub async fn close(&self) {
        match &self.backend {
            Backend::MySql(pool) => pool.close().await,
            Backend::Sqlite(pool) => pool.close().await,
        }
    }
}
