//! Remote log service client.
//!
//! Two operations over the backend HTTP contract, each attempted exactly
//! once per call: no retries, no caching, no cancellation.

use contracts::domain::extraction::ExtractionOutcome;
use contracts::domain::log_record::{LogListResponse, LogRecord};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Read failure of `fetch_saved_logs`. Carries a fixed user-facing message;
/// callers treat the failure as "no logs available" for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError(pub String);

impl FetchError {
    fn new() -> Self {
        Self("Error getting the Log Files!".to_string())
    }
}

/// GET `{base}/logs`, envelope `{ "data": [LogRecord...] }`.
pub async fn fetch_saved_logs() -> Result<Vec<LogRecord>, FetchError> {
    let response = Request::get(&format!("{}/logs", api_base()))
        .send()
        .await
        .map_err(|_| FetchError::new())?;

    if !response.ok() {
        return Err(FetchError::new());
    }

    let list: LogListResponse = response.json().await.map_err(|_| FetchError::new())?;
    Ok(list.data)
}

/// POST `{base}/logs/extract` and classify the response.
///
/// Any transport-level failure (refused connection, unreadable body)
/// collapses into [`ExtractionOutcome::TransportFailure`]; the status/body
/// mapping itself lives in the contracts crate.
pub async fn trigger_extraction() -> ExtractionOutcome {
    let response = match Request::post(&format!("{}/logs/extract", api_base()))
        .send()
        .await
    {
        Ok(response) => response,
        Err(error) => {
            leptos::logging::log!("Extraction request failed: {}", error);
            return ExtractionOutcome::TransportFailure;
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ExtractionOutcome::classify(status, &body)
}
