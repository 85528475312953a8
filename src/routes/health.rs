use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::health::HealthResponse,
    services::health_service::{self, ProbeStatus},
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    responses(
        (status = 200, description = "Backend is reachable", body = HealthResponse),
        (status = 500, description = "Backend is unhealthy or unreachable", body = HealthResponse)
    )
)]
/// Probe the hosted backend and report its status and latency.
pub async fn healthcheck(State(state): State<SharedState>) -> (StatusCode, Json<HealthResponse>) {
    let report = health_service::check(state.gateway()).await;
    let code = if report.status == ProbeStatus::Healthy {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(HealthResponse::from(report)))
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/healthcheck", get(healthcheck))
}
