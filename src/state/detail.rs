//! Detail view controller driving the single-article page.

use crate::dao::{
    articles::{ArticleRepository, RepositoryError},
    models::ArticleRecord,
};

use super::{FetchGeneration, FetchTicket, log_masked_failure};

/// Lifecycle of the article detail view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailPhase {
    /// Not yet activated.
    #[default]
    Idle,
    /// A fetch is outstanding; any previously shown article is discarded.
    Loading,
    /// The requested article was resolved.
    Found(ArticleRecord),
    /// No enabled article matches; backend failures collapse here too and
    /// are distinguished only in the logs.
    NotFound,
}

/// State machine behind the article detail page.
///
/// The only recovery from [`DetailPhase::NotFound`] is navigating back to
/// the catalog; the same identifier is never retried automatically.
#[derive(Debug, Default)]
pub struct DetailController {
    phase: DetailPhase,
    generation: FetchGeneration,
}

impl DetailController {
    /// Fresh controller in the idle phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation, superseding any outstanding fetch and
    /// dropping whatever article was shown before.
    pub fn begin(&mut self) -> FetchTicket {
        self.phase = DetailPhase::Loading;
        self.generation.begin()
    }

    /// Apply a fetch result unless a newer activation superseded it.
    ///
    /// Returns whether the result was applied.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<ArticleRecord, RepositoryError>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }

        self.phase = match result {
            Ok(article) => DetailPhase::Found(article),
            Err(err) => {
                log_masked_failure("article-detail", &err);
                DetailPhase::NotFound
            }
        };

        true
    }

    /// Run one full activation against the repository.
    pub async fn activate(&mut self, repository: &ArticleRepository, id: &str) {
        let ticket = self.begin();
        let result = repository.get_by_id(id).await;
        self.complete(ticket, result);
    }

    /// Current phase.
    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// The resolved article, if the view reached [`DetailPhase::Found`].
    pub fn article(&self) -> Option<&ArticleRecord> {
        match &self.phase {
            DetailPhase::Found(article) => Some(article),
            _ => None,
        }
    }
}
