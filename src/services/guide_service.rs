//! Service helpers backing the guide catalog and article detail pages.

use tracing::warn;

use crate::{
    dto::guide::{ArticleResponse, CatalogResponse},
    state::{SharedState, catalog::CatalogController, detail::DetailController},
};

/// Render the catalog of published articles.
///
/// Backend failures and a missing backend configuration are masked as the
/// empty catalog; the diagnostics stay in the logs.
pub async fn catalog(state: &SharedState) -> CatalogResponse {
    let Some(repository) = state.repository() else {
        warn!("backend not configured; serving empty catalog");
        return CatalogResponse::default();
    };

    let mut controller = CatalogController::new();
    controller.activate(repository).await;
    CatalogResponse::from_articles(controller.articles())
}

/// Resolve one article for the detail page.
///
/// Disabled rows, unknown identifiers, and masked backend failures all
/// come back as `None`; callers cannot tell them apart from the result.
pub async fn article(state: &SharedState, id: &str) -> Option<ArticleResponse> {
    let Some(repository) = state.repository() else {
        warn!("backend not configured; article lookup unavailable");
        return None;
    };

    let mut controller = DetailController::new();
    controller.activate(repository, id).await;
    controller.article().map(ArticleResponse::from)
}
