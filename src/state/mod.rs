//! Shared application state and the view-controller building blocks.

pub mod catalog;
pub mod detail;

use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    config::BackendConfig,
    dao::{
        articles::{ArticleRepository, RepositoryError},
        postgrest::{GatewayResult, PostgrestClient},
    },
};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the backend handles, when configured.
pub struct AppState {
    gateway: Option<PostgrestClient>,
    repository: Option<ArticleRepository>,
}

impl AppState {
    /// Construct the shared state from an optional backend configuration.
    ///
    /// Without configuration the service still serves traffic: guide routes
    /// render the empty affordance and the health probe reports the missing
    /// configuration.
    pub fn new(config: Option<BackendConfig>) -> GatewayResult<SharedState> {
        let gateway = config.as_ref().map(PostgrestClient::new).transpose()?;
        let repository = gateway.clone().map(ArticleRepository::new);

        Ok(Arc::new(Self {
            gateway,
            repository,
        }))
    }

    /// Handle to the query gateway, if the backend is configured.
    pub fn gateway(&self) -> Option<&PostgrestClient> {
        self.gateway.as_ref()
    }

    /// Handle to the article repository, if the backend is configured.
    pub fn repository(&self) -> Option<&ArticleRepository> {
        self.repository.as_ref()
    }
}

/// Ticket identifying one activation of a view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Monotonic activation counter.
///
/// A completion is applied only while its ticket matches the latest
/// activation, so a superseded fetch can never overwrite fresher state
/// (last-activation-wins).
#[derive(Debug, Default)]
pub(crate) struct FetchGeneration(u64);

impl FetchGeneration {
    /// Start a new activation, invalidating every outstanding ticket.
    pub(crate) fn begin(&mut self) -> FetchTicket {
        self.0 += 1;
        FetchTicket(self.0)
    }

    /// Whether `ticket` still belongs to the latest activation.
    pub(crate) fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.0
    }
}

/// Log a masked repository failure with the policy shared by both
/// user-facing surfaces: zero matches is a normal outcome, anything else is
/// an operator-level error that must never reach the renderer.
pub(crate) fn log_masked_failure(surface: &'static str, err: &RepositoryError) {
    match err {
        RepositoryError::NotFound => debug!(surface, "no matching content"),
        other => {
            error!(surface, error = %other, "backend read failed; rendering as missing content");
        }
    }
}
