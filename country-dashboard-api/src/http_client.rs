//! HTTP request execution
//!
//! One place for sending a request, mapping transport failures and HTTP status
//! codes to [`ApiError`], logging, and retrying transient failures.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a 2xx response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, query, headers)
    /// * `label` - what is being fetched, used for logs and for `NotFound`
    ///
    /// # Errors
    /// * `Timeout` / `Network` - transport failures, 502/503/504
    /// * `RateLimited` - HTTP 429
    /// * `NotFound` - HTTP 404
    /// * `HttpStatus` - any other non-success status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        label: &str,
    ) -> Result<String, ApiError> {
        log::debug!("GET {label}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("{label}: HTTP {status}");

        // Retry-After must be read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        match status {
            429 => {
                log::warn!("{label}: rate limited, retry_after={retry_after:?}");
                return Err(ApiError::RateLimited { retry_after });
            }
            404 => {
                return Err(ApiError::NotFound {
                    query: label.to_string(),
                });
            }
            502..=504 => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("{label}: upstream error HTTP {status}");
                return Err(ApiError::Network {
                    detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
                });
            }
            _ => {}
        }

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        if !(200..300).contains(&status) {
            return Err(ApiError::HttpStatus {
                status,
                body: truncate_for_log(&body),
            });
        }

        log::debug!("{label}: body {}", truncate_for_log(&body));

        Ok(body)
    }

    /// Parse a JSON body into `T`.
    pub fn parse_json<T>(body: &str, label: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("{label}: JSON parse failed: {e}");
            log::error!("{label}: raw response: {}", truncate_for_log(body));
            ApiError::Parse {
                detail: e.to_string(),
            }
        })
    }

    /// [`execute_request`](Self::execute_request) with retries.
    ///
    /// # Retry strategy
    /// - Only errors where [`ApiError::is_retryable`] holds are retried
    /// - `RateLimited` with `Retry-After` waits that long (capped at 30s)
    /// - Otherwise exponential backoff: 100ms, 200ms, 400ms, ... (capped at 10s)
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        label: &str,
        max_retries: u32,
    ) -> Result<String, ApiError> {
        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("{label}: request cannot be cloned, retry disabled");
                return Self::execute_request(request_builder, label).await;
            };

            match Self::execute_request(req, label).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "{} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        label,
                        attempt + 1,
                        max_retries + 1,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::Network {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    if let ApiError::RateLimited {
        retry_after: Some(secs),
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
