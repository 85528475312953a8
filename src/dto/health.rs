use serde::Serialize;
use utoipa::ToSchema;

use crate::services::health_service::{HealthReport, ProbeStatus};

use super::{format_system_time, format_system_time_human};

/// Wire representation of one health probe run.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Probe classification: `healthy`, `unhealthy` or `error`.
    pub status: String,
    /// Human-readable detail.
    pub message: String,
    /// Elapsed time of the diagnostic query, `ms`-suffixed. Omitted when no
    /// network call was attempted, so a real probe is always
    /// distinguishable from a configuration failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    /// RFC 3339 instant the report was produced.
    pub timestamp: String,
    /// Operator-friendly instant, present only on the healthy branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<String>,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        let status = match report.status {
            ProbeStatus::Healthy => "healthy",
            ProbeStatus::Unhealthy => "unhealthy",
            ProbeStatus::Error => "error",
        };
        let checked_at = matches!(report.status, ProbeStatus::Healthy)
            .then(|| format_system_time_human(report.produced_at));

        Self {
            status: status.to_string(),
            message: report.message,
            response_time: report.response_time_ms.map(|ms| format!("{ms}ms")),
            timestamp: format_system_time(report.produced_at),
            checked_at,
        }
    }
}
