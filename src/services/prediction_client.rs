//! Prediction service client.
//!
//! Sends a [`ProjectInput`] to `POST <base>/predict` and decodes the
//! [`PredictionOutput`]. No retries happen here; the caller decides.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::domain::{PredictionOutput, ProjectInput};
use crate::error::PredictionError;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Anything that can turn a project input into a prediction.
pub trait Predictor {
    fn predict(
        &self,
        input: &ProjectInput,
    ) -> impl Future<Output = Result<PredictionOutput, PredictionError>> + Send;
}

/// HTTP client for the prediction service.
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

/// Error body from the prediction service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    /// A plain string for explicit failures; validation failures send a list here.
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl PredictionClient {
    /// Create a new prediction service client.
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = base_url, "Prediction client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the prediction service is reachable.
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/docs", self.base_url);

        self.client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Prediction service health check failed")?
            .error_for_status()
            .context("Prediction service unhealthy")?;

        Ok(())
    }

    /// Request a risk prediction for one project.
    #[instrument(
        skip(self, input),
        fields(project_name = %input.project_name, request_id = tracing::field::Empty)
    )]
    pub async fn predict(&self, input: &ProjectInput) -> Result<PredictionOutput, PredictionError> {
        let url = format!("{}/predict", self.base_url);
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        debug!(url = %url, "Prediction request");

        let response = self
            .client
            .post(&url)
            .header(X_REQUEST_ID, &request_id)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Prediction request failed");
                PredictionError::Transport(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .and_then(|detail| detail.as_str().map(str::to_string));

            let err = PredictionError::from_status(status, detail);
            error!(status = %status, error = %err, "Prediction service error");
            return Err(err);
        }

        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read prediction response");
            PredictionError::Transport(e.to_string())
        })?;

        let output: PredictionOutput = serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "Failed to parse prediction response");
            PredictionError::from(e)
        })?;

        output.check_ranges().map_err(|reason| {
            error!(reason = %reason, "Prediction response out of range");
            PredictionError::Parse(reason)
        })?;

        Ok(output)
    }
}

impl Predictor for PredictionClient {
    fn predict(
        &self,
        input: &ProjectInput,
    ) -> impl Future<Output = Result<PredictionOutput, PredictionError>> + Send {
        PredictionClient::predict(self, input)
    }
}
