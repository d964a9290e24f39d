use crate::{
    AppState,
    dto::{CreatedRecord, SampleData, iso_timestamp},
    errors::ApiError,
};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use rand::Rng;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Opaque record id: 9 base-36 characters. Nothing persists, so collision
/// probability is not a concern.
fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// ANY /getData
/// Response: 200 OK with a fresh SampleData payload. Method and body are
/// ignored; `requestId` is the per-invocation correlation id.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<SampleData>, ApiError> {
    let data = SampleData {
        message: "Hello from Azure Functions!".to_string(),
        timestamp: iso_timestamp(),
        environment: state.environment.clone(),
        request_id: Uuid::new_v4().to_string(),
    };

    info!("Handled getData request {}", data.request_id);

    Ok(Json(data))
}

/// ANY /createData
/// Body: any JSON object
/// Response: 201 Created with the body echoed back plus generated `id`,
/// `createdAt` and `status` fields. The "creation" is a pure echo-transform;
/// nothing is written anywhere.
pub async fn create_data(body: Bytes) -> Result<(StatusCode, Json<CreatedRecord>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::MissingBody);
    }

    let value: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;

    let mut fields = match value {
        Value::Null => return Err(ApiError::MissingBody),
        Value::Object(map) => map,
        // Spreading a non-object contributes no fields
        _ => Map::new(),
    };

    // Reserved keys are always generated server-side
    for key in ["id", "createdAt", "status"] {
        fields.remove(key);
    }

    let record = CreatedRecord {
        id: generate_id(),
        fields,
        created_at: iso_timestamp(),
        status: "created",
    };

    let rendered = serde_json::to_string(&record)
        .map_err(|e| ApiError::InternalError(format!("Failed to serialize record: {}", e)))?;
    info!("Created data: {}", rendered);

    Ok((StatusCode::CREATED, Json(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn generated_id_is_nine_base36_chars() {
        for _ in 0..100 {
            let id = generate_id();
            assert_eq!(id.len(), 9);
            assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn timestamps_are_iso_8601() {
        let ts = iso_timestamp();
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
