use crate::{
    AppState,
    dto::{HealthState, HealthStatus, SubsystemChecks, iso_timestamp},
};
use axum::{Json, extract::State};
use tracing::info;

/// ANY /health
/// Response: 200 OK with the full health report. Method and body are
/// ignored; every check reports healthy unconditionally.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    info!("Health check requested");

    Json(HealthStatus {
        status: HealthState::Healthy,
        timestamp: iso_timestamp(),
        version: state.version.clone(),
        environment: state.environment.clone(),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        checks: SubsystemChecks::all_healthy(),
    })
}
