//! Page fetching with HTTP status classification

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a page and returns its body as text.
///
/// There is no retry: transport failures, timeouts and non-success statuses
/// are returned as the matching `AppError` variant.
#[instrument(skip(client))]
pub async fn fetch_page_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(classify_request_error(e, url));
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::page_not_found(url),
            400..=499 => AppError::client_error(status_code, reason, url),
            _ => AppError::server_error(status_code, reason, url),
        });
    }

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        classify_request_error(e, url)
    })?;
    debug!("Response length: {} bytes", text.len());
    Ok(text)
}

fn classify_request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::Fetch(e)
    }
}
