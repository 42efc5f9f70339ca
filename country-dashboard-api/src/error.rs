//! Unified error type for country API operations

use thiserror::Error;

/// Error returned by every [`CountryApi`](crate::CountryApi) operation.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`Network`](Self::Network) - connection refused, DNS failure, 502/503/504
/// - [`Timeout`](Self::Timeout) - request timed out
/// - [`RateLimited`](Self::RateLimited) - HTTP 429
///
/// The built-in HTTP client retries these with exponential backoff.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A network-level error occurred.
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// No country matched the query (HTTP 404).
    #[error("No country matches '{query}'")]
    NotFound {
        /// The name or path that was queried.
        query: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited {
        /// Suggested wait time in seconds, if the API sent `Retry-After`.
        retry_after: Option<u64>,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The query cannot be sent (empty name, bad base URL, ...).
    #[error("Invalid query: {detail}")]
    InvalidQuery {
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（无匹配结果、输入非法等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidQuery { .. } | Self::RateLimited { .. }
        )
    }

    /// Whether the HTTP layer should retry the request.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

fn retry_suffix(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
