use serde::Serialize;
use time::Date;
use utoipa::ToSchema;

use crate::dao::models::{ArticleRecord, ArticleSummary};

/// Wire representation of the article catalog.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct CatalogResponse {
    /// Published articles in catalog order; empty when nothing is
    /// available (or when a backend failure was masked).
    pub articles: Vec<ArticleSummary>,
}

impl CatalogResponse {
    /// Build the response from the controller's rendered slice.
    pub fn from_articles(articles: &[ArticleSummary]) -> Self {
        Self {
            articles: articles.to_vec(),
        }
    }
}

/// Wire representation of one article detail page.
///
/// Visibility and ordering metadata stay internal and are never serialized.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleResponse {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Full body text; embedded line breaks render as paragraph breaks.
    pub content: String,
    /// Optional short summary.
    pub preview: Option<String>,
    /// Optional cover image URL.
    pub cover_image: Option<String>,
    /// Display name of the author.
    pub author: String,
    /// Calendar date of publication.
    pub published_date: Date,
}

impl From<&ArticleRecord> for ArticleResponse {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            content: record.content.clone(),
            preview: record.preview.clone(),
            cover_image: record.cover_image.clone(),
            author: record.author.clone(),
            published_date: record.published_date,
        }
    }
}
