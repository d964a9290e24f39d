use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// ISO-8601 timestamp with millisecond precision and `Z` suffix,
/// e.g. `2026-08-25T12:00:00.000Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct SubsystemChecks {
    pub database: HealthState,
    pub storage: HealthState,
    pub apis: HealthState,
}

impl SubsystemChecks {
    /// Structural placeholder: no connectivity is actually probed.
    pub fn all_healthy() -> Self {
        Self {
            database: HealthState::Healthy,
            storage: HealthState::Healthy,
            apis: HealthState::Healthy,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: f64,
    pub checks: SubsystemChecks,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
    pub request_id: String,
}

/// Echo-transform of a caller-supplied JSON object. Nothing is persisted;
/// the record lives only in this response. Field order mirrors the wire
/// contract: `id`, caller fields, `createdAt`, `status`.
#[derive(Debug, Serialize)]
pub struct CreatedRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
