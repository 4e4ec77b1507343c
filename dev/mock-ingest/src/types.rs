use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Incoming payload for HTTP POST /api/telemetry; field names follow
// the device wire contract.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryIn {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    pub lat: f64,
    pub long: f64,
}

// One remembered submission.
#[derive(Debug, Clone, Serialize)]
pub struct StoredRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: TelemetryIn,
}

// Response body for POST /api/telemetry.
#[derive(Debug, Serialize)]
pub struct IngestResp {
    pub status: &'static str,
    pub id: Uuid,
}
