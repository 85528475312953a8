//! Repository translating backend queries into domain-level article reads.

use thiserror::Error;

use super::{
    models::{ArticleRecord, ArticleSummary},
    postgrest::{GatewayError, PostgrestClient},
};

/// Backend table holding guide articles.
pub const GUIDE_TABLE: &str = "guide_topics";

/// Projection fetched for the catalog view; the body stays on the backend.
const CATALOG_COLUMNS: &str = "id,title,preview,author,published_date,cover_image";

/// Convenient result alias returning [`RepositoryError`] failures.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the article repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No enabled article matches the requested identifier.
    ///
    /// Disabled and nonexistent rows are deliberately indistinguishable
    /// here; disabled content is invisible, not merely unlisted.
    #[error("article not found")]
    NotFound,
    /// The backend reported an error while reading.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Read-only access to published articles.
#[derive(Clone)]
pub struct ArticleRepository {
    gateway: PostgrestClient,
}

impl ArticleRepository {
    /// Wrap the given gateway.
    pub fn new(gateway: PostgrestClient) -> Self {
        Self { gateway }
    }

    /// List every enabled article in catalog order.
    ///
    /// An empty catalog is a normal outcome and comes back as an empty
    /// vector; callers must not treat a gateway error as empty.
    pub async fn list_published(&self) -> RepositoryResult<Vec<ArticleSummary>> {
        let rows = self
            .gateway
            .select(
                GUIDE_TABLE,
                CATALOG_COLUMNS,
                &[("is_enabled", "eq.true".into())],
                Some("display_order.asc"),
            )
            .await?;

        Ok(rows)
    }

    /// Fetch one enabled article by identifier, body included.
    ///
    /// An empty identifier can never match and resolves to
    /// [`RepositoryError::NotFound`] without touching the backend.
    pub async fn get_by_id(&self, id: &str) -> RepositoryResult<ArticleRecord> {
        if id.is_empty() {
            return Err(RepositoryError::NotFound);
        }

        let row = self
            .gateway
            .select_single(
                GUIDE_TABLE,
                "*",
                &[("id", format!("eq.{id}")), ("is_enabled", "eq.true".into())],
            )
            .await?;

        row.ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use time::macros::date;

    use crate::config::BackendConfig;

    use super::*;

    fn repository(server: &MockServer) -> ArticleRepository {
        let config = BackendConfig::new(server.base_url(), "test-key");
        ArticleRepository::new(PostgrestClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn list_published_sends_visibility_filter_and_ordering() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/guide_topics")
                .query_param("select", CATALOG_COLUMNS)
                .query_param("is_enabled", "eq.true")
                .query_param("order", "display_order.asc");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {
                        "id": "a", "title": "Reconstitution basics", "preview": null,
                        "author": "Ada", "published_date": "2024-03-01", "cover_image": null
                    },
                    {
                        "id": "b", "title": "Storage and handling", "preview": "Keep it cold",
                        "author": "Ada", "published_date": "2024-03-02",
                        "cover_image": "https://img.example/b.png"
                    },
                    {
                        "id": "c", "title": "Dosing calculators", "preview": null,
                        "author": "Grace", "published_date": "2024-03-03", "cover_image": null
                    }
                ]));
        });

        let articles = repository(&server).list_published().await.unwrap();

        mock.assert();
        // Backend-native order is preserved as-is.
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(articles[0].published_date, date!(2024 - 03 - 01));
        assert_eq!(articles[1].preview.as_deref(), Some("Keep it cold"));
        assert!(articles[0].cover_image.is_none());
    }

    #[tokio::test]
    async fn list_published_empty_catalog_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/guide_topics");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        });

        let articles = repository(&server).list_published().await.unwrap();

        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn list_published_surfaces_backend_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/guide_topics");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "connection pool exhausted" }));
        });

        let err = repository(&server).list_published().await.unwrap_err();

        match err {
            RepositoryError::Gateway(GatewayError::QueryRejected { message, .. }) => {
                assert_eq!(message, "connection pool exhausted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_by_id_returns_the_full_record() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/guide_topics")
                .query_param("select", "*")
                .query_param("id", "eq.abc-123")
                .query_param("is_enabled", "eq.true")
                .header("accept", "application/vnd.pgrst.object+json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": "abc-123",
                    "title": "Reconstitution basics",
                    "content": "First paragraph.\n\nSecond paragraph.",
                    "preview": null,
                    "cover_image": null,
                    "author": "Ada",
                    "published_date": "2024-03-01",
                    "is_enabled": true,
                    "display_order": 0
                }));
        });

        let article = repository(&server).get_by_id("abc-123").await.unwrap();

        mock.assert();
        assert_eq!(article.id, "abc-123");
        assert!(article.content.contains("Second paragraph."));
        assert_eq!(article.display_order, 0);
    }

    #[tokio::test]
    async fn get_by_id_zero_match_is_not_found() {
        // Covers disabled rows too: the visibility filter makes them
        // indistinguishable from rows that never existed.
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/guide_topics");
            then.status(406)
                .header("content-type", "application/json")
                .json_body(json!({
                    "message": "JSON object requested, multiple (or no) rows returned",
                    "code": "PGRST116"
                }));
        });

        let err = repository(&server).get_by_id("missing-id").await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn get_by_id_backend_error_is_distinct_from_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/guide_topics");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "backend exploded" }));
        });

        let err = repository(&server).get_by_id("abc-123").await.unwrap_err();

        assert!(matches!(err, RepositoryError::Gateway(_)));
    }

    #[tokio::test]
    async fn get_by_id_empty_identifier_skips_the_backend() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/rest/v1/guide_topics");
            then.status(200);
        });

        let err = repository(&server).get_by_id("").await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound));
        mock.assert_hits(0);
    }
}
