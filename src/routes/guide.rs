use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::guide::{ArticleResponse, CatalogResponse},
    error::AppError,
    services::guide_service,
    state::SharedState,
};

/// Read-only endpoints backing the guide catalog and article pages.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/guide", get(list_articles))
        .route("/guide/{id}", get(get_article))
}

#[utoipa::path(
    get,
    path = "/guide",
    tag = "guide",
    responses((status = 200, description = "Published articles in catalog order", body = CatalogResponse))
)]
/// Return the visibility-filtered, ordered article catalog.
pub async fn list_articles(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(guide_service::catalog(&state).await)
}

#[utoipa::path(
    get,
    path = "/guide/{id}",
    tag = "guide",
    params(("id" = String, Path, description = "Opaque article identifier")),
    responses(
        (status = 200, description = "The requested article", body = ArticleResponse),
        (status = 404, description = "No enabled article matches the identifier")
    )
)]
/// Return one published article by identifier.
pub async fn get_article(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleResponse>, AppError> {
    guide_service::article(&state, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("article not found".into()))
}
