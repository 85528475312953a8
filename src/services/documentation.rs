use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Peptalk Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::guide::list_articles,
        crate::routes::guide::get_article,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::guide::CatalogResponse,
            crate::dto::guide::ArticleResponse,
            crate::dao::models::ArticleSummary,
        )
    ),
    tags(
        (name = "health", description = "Backend health probe"),
        (name = "guide", description = "Published article catalog and detail"),
    )
)]
pub struct ApiDoc;
