use std::collections::VecDeque;
use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::{IngestResp, StoredRecord, TelemetryIn};

// Keep a bounded window; this is a smoke-test aid, not storage.
const KEEP_RECORDS: usize = 256;

#[derive(Default)]
pub struct AppState {
    pub records: RwLock<VecDeque<StoredRecord>>,
}

pub async fn health() -> Json<Value> {
    Json(serde_json::json!({"status":"ok"}))
}

pub async fn ingest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<TelemetryIn>,
) -> Json<IngestResp> {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    let stored = StoredRecord {
        id: Uuid::new_v4(),
        received_at: Utc::now(),
        record: body,
    };

    tracing::info!(
        %request_id,
        record_id = %stored.id,
        device_id = %stored.record.device_id,
        lat = stored.record.lat,
        long = stored.record.long,
        "telemetry received"
    );

    let id = stored.id;
    {
        let mut records = state.records.write().await;
        if records.len() == KEEP_RECORDS {
            records.pop_front();
        }
        records.push_back(stored);
    }

    Json(IngestResp { status: "ok", id })
}

pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<StoredRecord>> {
    let records = state.records.read().await;
    Json(records.iter().cloned().collect())
}
