//! Row definitions for the article table.

use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

/// Catalog projection of a published article row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummary {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional short summary shown on the catalog card.
    pub preview: Option<String>,
    /// Display name of the author.
    pub author: String,
    /// Calendar date of publication.
    pub published_date: Date,
    /// Optional cover image URL; absent means a placeholder visual.
    pub cover_image: Option<String>,
}

/// Full article row, body and visibility metadata included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleRecord {
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
    /// Visibility flag; disabled rows are filtered out at the query level
    /// and never reach callers.
    pub is_enabled: bool,
    /// Catalog ordering key, never shown to users.
    pub display_order: i32,
}
