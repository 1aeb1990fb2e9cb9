use gloo_net::http::Request;
use shared_types::{Dealer, DealerListResponse, StateFilter};

use crate::config::{ConfigError, DirectoryConfig};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{detail}")]
    Http { status: u16, detail: String },
    #[error("Listing returned status {0}")]
    Status(i64),
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
    #[error(transparent)]
    Url(#[from] ConfigError),
}

/// Render an HTTP error, preferring the `error`/`message` field of a JSON body.
///
/// Django views answer failures with `{"error": ...}` (bad method or body) or
/// `{"status": <code>, "message": ...}` envelopes; anything else is echoed raw.
pub fn describe_error_body(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

async fn describe_http_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        detail: describe_error_body(status, &body),
    }
}

/// Unwrap the listing envelope; only `status == 200` carries usable rows.
pub fn into_dealers(response: DealerListResponse) -> Result<Vec<Dealer>, ApiError> {
    if !response.is_ok() {
        return Err(ApiError::Status(response.status));
    }
    Ok(response.dealers)
}

pub async fn fetch_dealers(
    config: &DirectoryConfig,
    filter: &StateFilter,
) -> Result<Vec<Dealer>, ApiError> {
    let url = config.dealers_url(filter)?;

    let response = Request::get(url.as_str())
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: DealerListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    into_dealers(data)
}
