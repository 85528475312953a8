//! Catalog view controller driving the published-article listing.

use crate::dao::{
    articles::{ArticleRepository, RepositoryError},
    models::ArticleSummary,
};

use super::{FetchGeneration, FetchTicket, log_masked_failure};

/// Lifecycle of the catalog view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogPhase {
    /// Not yet activated.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// At least one article is available, in catalog order.
    Populated(Vec<ArticleSummary>),
    /// The backend answered with zero enabled articles.
    Empty,
    /// The fetch failed; rendered identically to [`CatalogPhase::Empty`].
    Failed,
}

/// State machine behind the article catalog page.
///
/// Each activation performs exactly one fetch attempt; there is no
/// automatic retry.
#[derive(Debug, Default)]
pub struct CatalogController {
    phase: CatalogPhase,
    generation: FetchGeneration,
}

impl CatalogController {
    /// Fresh controller in the idle phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation, superseding any outstanding fetch.
    pub fn begin(&mut self) -> FetchTicket {
        self.phase = CatalogPhase::Loading;
        self.generation.begin()
    }

    /// Apply a fetch result unless a newer activation superseded it.
    ///
    /// Returns whether the result was applied.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ArticleSummary>, RepositoryError>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }

        self.phase = match result {
            Ok(articles) if articles.is_empty() => CatalogPhase::Empty,
            Ok(articles) => CatalogPhase::Populated(articles),
            Err(err) => {
                log_masked_failure("catalog", &err);
                CatalogPhase::Failed
            }
        };

        true
    }

    /// Run one full activation against the repository.
    pub async fn activate(&mut self, repository: &ArticleRepository) {
        let ticket = self.begin();
        let result = repository.list_published().await;
        self.complete(ticket, result);
    }

    /// Current phase, with [`CatalogPhase::Failed`] kept distinct so
    /// diagnostics can tell it apart from an empty catalog.
    pub fn phase(&self) -> &CatalogPhase {
        &self.phase
    }

    /// Articles to render. Failure is masked as the empty affordance.
    pub fn articles(&self) -> &[ArticleSummary] {
        match &self.phase {
            CatalogPhase::Populated(articles) => articles,
            _ => &[],
        }
    }

    /// Navigation hook: the identifier to route to for the item at `index`.
    pub fn select(&self, index: usize) -> Option<&str> {
        match &self.phase {
            CatalogPhase::Populated(articles) => {
                articles.get(index).map(|article| article.id.as_str())
            }
            _ => None,
        }
    }
}
