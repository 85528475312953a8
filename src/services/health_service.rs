//! Backend health probe: one bounded diagnostic query, classified.

use std::time::{Duration, Instant, SystemTime};

use tokio::time::timeout;
use tracing::{error, warn};

use crate::dao::postgrest::{GatewayError, PostgrestClient};

/// Reference table used for the existence count; it always exists on a
/// provisioned storefront project.
pub const REFERENCE_TABLE: &str = "products";

/// Upper bound on the diagnostic query so external monitors are never
/// blocked indefinitely.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const HEALTHY_MESSAGE: &str = "Database is active and responding";
const MISSING_CONFIG_MESSAGE: &str = "Missing configuration";
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Three-valued classification of a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The diagnostic query completed without error.
    Healthy,
    /// The backend answered, but reported an error.
    Unhealthy,
    /// The attempt itself failed (configuration, transport, timeout).
    Error,
}

/// Outcome of one probe run. Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct HealthReport {
    /// Classification of the run.
    pub status: ProbeStatus,
    /// Human-readable detail; raw backend text on the unhealthy branch.
    pub message: String,
    /// Elapsed wall-clock time of the attempt, in whole milliseconds.
    /// Absent when no network call was made.
    pub response_time_ms: Option<u64>,
    /// Instant the report was produced.
    pub produced_at: SystemTime,
}

impl HealthReport {
    fn new(status: ProbeStatus, message: impl Into<String>, response_time_ms: Option<u64>) -> Self {
        Self {
            status,
            message: message.into(),
            response_time_ms,
            produced_at: SystemTime::now(),
        }
    }
}

/// Run one diagnostic count against the reference table and classify the
/// outcome.
///
/// Read-only and idempotent; safe for uptime monitors to invoke repeatedly.
/// Missing configuration short-circuits without any network attempt.
pub async fn check(gateway: Option<&PostgrestClient>) -> HealthReport {
    let Some(gateway) = gateway else {
        error!("health probe invoked without backend configuration");
        return HealthReport::new(ProbeStatus::Error, MISSING_CONFIG_MESSAGE, None);
    };

    let start = Instant::now();
    let outcome = timeout(PROBE_TIMEOUT, gateway.count(REFERENCE_TABLE)).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(_count)) => HealthReport::new(ProbeStatus::Healthy, HEALTHY_MESSAGE, Some(elapsed_ms)),
        Ok(Err(GatewayError::QueryRejected {
            table,
            status,
            message,
        })) => {
            warn!(%status, table = %table, "backend reported an error during the health probe");
            HealthReport::new(ProbeStatus::Unhealthy, message, Some(elapsed_ms))
        }
        Ok(Err(err)) => {
            error!(error = %err, "health probe attempt failed");
            HealthReport::new(
                ProbeStatus::Error,
                non_empty_or_fallback(err.to_string()),
                Some(elapsed_ms),
            )
        }
        Err(_) => {
            error!(limit = ?PROBE_TIMEOUT, "health probe timed out");
            HealthReport::new(
                ProbeStatus::Error,
                format!("Health probe timed out after {}s", PROBE_TIMEOUT.as_secs()),
                Some(elapsed_ms),
            )
        }
    }
}

fn non_empty_or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use httpmock::Method::HEAD;
    use httpmock::prelude::*;

    use crate::config::BackendConfig;

    use super::*;

    fn gateway(base_url: &str) -> PostgrestClient {
        PostgrestClient::new(&BackendConfig::new(base_url, "test-key")).unwrap()
    }

    #[tokio::test]
    async fn missing_configuration_short_circuits() {
        let report = check(None).await;

        assert_eq!(report.status, ProbeStatus::Error);
        assert_eq!(report.message, "Missing configuration");
        assert!(report.response_time_ms.is_none());
    }

    #[tokio::test]
    async fn reachable_backend_is_healthy() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(HEAD)
                .path("/rest/v1/products")
                .header("Prefer", "count=exact");
            then.status(200).header("Content-Range", "0-0/42");
        });

        let client = gateway(&server.base_url());
        let report = check(Some(&client)).await;

        mock.assert();
        assert_eq!(report.status, ProbeStatus::Healthy);
        assert_eq!(report.message, "Database is active and responding");
        assert!(report.response_time_ms.is_some());
    }

    #[tokio::test]
    async fn backend_reported_error_is_unhealthy() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/rest/v1/products");
            then.status(503);
        });

        let client = gateway(&server.base_url());
        let report = check(Some(&client)).await;

        assert_eq!(report.status, ProbeStatus::Unhealthy);
        // HEAD responses carry no body, so the status reason stands in for
        // the backend's error text.
        assert_eq!(report.message, "Service Unavailable");
        assert!(report.response_time_ms.is_some());
    }

    #[tokio::test]
    async fn connectivity_failure_is_an_error_with_elapsed_time() {
        // Nothing listens on the discard port, so the connection is refused.
        let client = gateway("http://127.0.0.1:9");
        let report = check(Some(&client)).await;

        assert_eq!(report.status, ProbeStatus::Error);
        assert!(!report.message.is_empty());
        assert!(report.response_time_ms.is_some());
    }

    #[tokio::test]
    async fn classification_is_idempotent_under_stable_conditions() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/rest/v1/products");
            then.status(200).header("Content-Range", "0-0/42");
        });

        let client = gateway(&server.base_url());
        let first = check(Some(&client)).await;
        let second = check(Some(&client)).await;

        assert_eq!(first.status, second.status);
    }
}
