use serde::{Deserialize, Serialize};

use super::errors::NewsError;
use crate::models::NewArticle;

// Column widths of the `news` table.
const MAX_TITLE: usize = 255;
const MAX_CATEGORY: usize = 100;
const MAX_AUTHOR: usize = 100;
const MAX_IMAGE: usize = 500;

/// Body of `POST /api/news`. The date is not accepted from the client.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateNewsRequest {
    pub title: String,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub image: Option<String>,
    pub summary: String,
    pub content: String,
}

impl CreateNewsRequest {
    /// Checks the fields and stamps the article with `date`.
    pub fn into_new_article(self, date: String) -> Result<NewArticle, NewsError> {
        required("title", &self.title, MAX_TITLE)?;
        required("category", &self.category, MAX_CATEGORY)?;
        required("author", &self.author, MAX_AUTHOR)?;

        // the form posts an empty string when no image is given
        let image = self.image.filter(|url| !url.trim().is_empty());
        if let Some(ref url) = image {
            max_len("image", url, MAX_IMAGE)?;
        }

        Ok(NewArticle {
            title: self.title,
            category: self.category,
            author: self.author,
            date,
            image,
            summary: self.summary,
            content: self.content,
        })
    }
}

fn required(field: &str, value: &str, max: usize) -> Result<(), NewsError> {
    if value.trim().is_empty() {
        return Err(NewsError::Validation(format!("{field} must not be empty")));
    }
    max_len(field, value, max)
}

fn max_len(field: &str, value: &str, max: usize) -> Result<(), NewsError> {
    if value.chars().count() > max {
        return Err(NewsError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
