// Remote submission for ShieldSentry
// Posts scans to a hosted scan-url endpoint and reads back its verdict

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body expected by the scan-url endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSubmission {
    pub url: String,
    pub source: String,
}

/// The endpoint's verdict for a submitted URL.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionOutcome {
    /// "high" or "low"
    pub risk_level: String,
    /// "blocked" or "allowed"
    pub status: String,
    /// Endpoint-side scan metadata, passed through untouched
    #[serde(default)]
    pub scan_result: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SubmissionEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<SubmissionOutcome>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for a hosted scan-url endpoint.
pub struct RemoteSubmitter {
    pub client: Client,
    pub endpoint: String,
}

impl RemoteSubmitter {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Submit one URL; the endpoint records it and returns its own verdict.
    pub async fn submit(&self, url: &str, source: &str) -> Result<SubmissionOutcome, String> {
        let body = ScanSubmission {
            url: url.to_string(),
            source: source.to_string(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Failed to reach {}: {}", self.endpoint, e))?;

        let envelope: SubmissionEnvelope = resp
            .json()
            .await
            .map_err(|e| format!("Unexpected response from {}: {}", self.endpoint, e))?;

        if envelope.success {
            envelope
                .data
                .ok_or_else(|| "Endpoint reported success without data".to_string())
        } else {
            Err(envelope
                .error
                .unwrap_or_else(|| "Endpoint reported failure".to_string()))
        }
    }
}
