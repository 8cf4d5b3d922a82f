//! Transport plumbing shared by the HTTP model clients.
//!
//! Every failure here is folded into [`DomainError::Provider`] with enough
//! detail for operator logs. The HTTP layer never shows that detail to callers.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::domain::{ConfigError, DomainError};

/// Build the single `reqwest::Client` a model client uses for its lifetime.
/// The configured timeout bounds the whole request, body included.
pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ConfigError::invalid("http_client", e.to_string()))
}

/// Translate a transport-level `reqwest` error.
///
/// reqwest's `Display` stops at the top-level message, so the io/hyper source
/// chain (connection refused, DNS, TLS) is appended for the operator log.
pub(crate) fn send_error(client_name: &str, err: reqwest::Error, timeout: Duration) -> DomainError {
    let is_timeout = err.is_timeout();
    let is_connect = err.is_connect();
    let detail = format!("{:#}", anyhow::Error::from(err));

    if is_timeout {
        DomainError::provider(format!(
            "{client_name}: request timed out after {}s: {detail}",
            timeout.as_secs_f64()
        ))
    } else if is_connect {
        DomainError::provider(format!("{client_name}: could not connect: {detail}"))
    } else {
        DomainError::provider(format!("{client_name}: request failed: {detail}"))
    }
}

/// Read the response body, turning non-2xx statuses into provider errors.
pub(crate) async fn read_success_body(
    client_name: &str,
    response: reqwest::Response,
    timeout: Duration,
) -> Result<String, DomainError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{client_name}: API returned {status}: {body}");
        return Err(DomainError::provider(format!(
            "{client_name}: {}",
            describe_status(status)
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| send_error(client_name, e, timeout))?;
    debug!("{client_name} raw response: {body}");
    Ok(body)
}

fn describe_status(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("authentication rejected ({status})")
        }
        StatusCode::TOO_MANY_REQUESTS => format!("rate limited or quota exhausted ({status})"),
        _ => format!("API returned {status}"),
    }
}
