use reqwest::{Client, StatusCode, header};
use url::Url;

use crate::types::{FieldSnapshot, TelemetryRecord};

/// Outcome of one submission. All three branches are terminal; none
/// are retried or escalated.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The endpoint text was not a usable URL; no request was made.
    InvalidEndpoint,
    /// The request never produced a response.
    TransportFailure(String),
    /// Any received response, HTTP error statuses included. The status
    /// is kept for callers that want to branch on it; the submitter
    /// itself does not.
    Completed { status: StatusCode, body: String },
}

impl SubmitOutcome {
    /// Text shown to the user: reason phrase and body for completed
    /// requests, the raw transport error otherwise.
    pub fn render(&self) -> String {
        match self {
            SubmitOutcome::InvalidEndpoint => "invalid URL".to_string(),
            SubmitOutcome::TransportFailure(message) => message.clone(),
            SubmitOutcome::Completed { status, body } => {
                let reason = status.canonical_reason().unwrap_or_default();
                format!("{reason} {body}")
            }
        }
    }
}

/// Issues telemetry POSTs over a shared client. Concurrent calls are
/// independent; each holds its own snapshot of the input text.
#[derive(Clone, Default)]
pub struct Submitter {
    client: Client,
}

impl Submitter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// One POST per call, no retry, no timeout beyond the client
    /// defaults.
    pub async fn submit(&self, endpoint_url: &str, snapshot: &FieldSnapshot) -> SubmitOutcome {
        let record = TelemetryRecord::from_snapshot(snapshot);
        let payload = serde_json::to_string(&record).unwrap_or_default();

        if !endpoint_is_valid(endpoint_url) {
            tracing::warn!(endpoint = endpoint_url, "rejected endpoint before any I/O");
            return SubmitOutcome::InvalidEndpoint;
        }

        tracing::info!(
            endpoint = endpoint_url,
            device_id = %record.device_id,
            lat = record.lat,
            long = record.long,
            "posting telemetry"
        );

        let response = match self
            .client
            .post(endpoint_url)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "telemetry post failed");
                return SubmitOutcome::TransportFailure(e.to_string());
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => {
                tracing::info!(%status, "telemetry response received");
                SubmitOutcome::Completed { status, body }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read response body");
                SubmitOutcome::TransportFailure(e.to_string())
            }
        }
    }
}

// Scheme plus host is enough; there is no scheme allow-list.
fn endpoint_is_valid(endpoint: &str) -> bool {
    match Url::parse(endpoint) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
